pub mod config;
pub use config::{Config, FilterPolicy};

pub mod db;
pub use db::Db;

pub mod registry;
pub use registry::{HttpRegistry, RegistryClient};

mod service;
pub use service::CarService;

mod validator;
pub use validator::Validator;

pub use carreg_core::{
    filter::{self, Column},
    Car, CarPatch, Error, Filter, Owner, OwnerPatch, Pagination, Result,
};
