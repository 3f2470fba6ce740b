pub mod driver;
pub use driver::{Connection, Driver};

mod error;
pub use error::{Error, IntoError};

pub mod filter;
pub use filter::{Filter, Pagination, Predicate};

mod model;
pub use model::{Car, CarPatch, Owner, OwnerPatch};

mod value;
pub use value::Value;

/// A Result type alias that uses carreg's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
