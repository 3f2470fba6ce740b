mod builder;
mod connect;
mod pool;

pub use builder::Builder;
pub use connect::Connect;
pub use pool::*;

use carreg_core::{
    driver::{
        operation::{DeleteById, GetById, Insert, Query, UpdateById},
        Driver, Operation, Response,
    },
    filter::FilterAdder,
    Car, CarPatch, Error, Filter, Pagination, Result,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
#[derive(Debug)]
struct Shared {
    pool: Pool,
}

/// A handle to the car store.
///
/// Cloning is cheap; every clone draws connections from the same pool. Each
/// call checks a connection out for the duration of one operation.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the store at `url` with default settings.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::builder().connect(url).await
    }

    /// Builds a handle over an already constructed driver.
    pub async fn new(driver: impl Driver) -> Result<Db> {
        Db::builder().build(driver).await
    }

    pub(crate) fn from_pool(pool: Pool) -> Db {
        Db {
            shared: Arc::new(Shared { pool }),
        }
    }

    async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let mut connection = self.shared.pool.get().await?;
        connection.exec(op.into()).await
    }

    /// Saves `cars`, skipping registration numbers that are already stored.
    ///
    /// Returns the number of records written.
    pub async fn add_cars(&self, cars: Vec<Car>) -> Result<u64> {
        self.exec(Insert { cars }).await?.into_count()
    }

    pub async fn get_car(&self, id: i64) -> Result<Car> {
        self.exec(GetById { id })
            .await?
            .into_cars()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::record_not_found(format!("car_id={id}")))
    }

    pub async fn list_cars(&self, filter: Filter, pagination: Pagination) -> Result<Vec<Car>> {
        self.exec(Query { filter, pagination }).await?.into_cars()
    }

    /// Writes the fields present in `patch`.
    pub async fn update_car(&self, id: i64, patch: CarPatch) -> Result<()> {
        self.exec(UpdateById { id, patch }).await?;
        Ok(())
    }

    pub async fn delete_car(&self, id: i64) -> Result<()> {
        self.exec(DeleteById { id }).await?;
        Ok(())
    }

    /// Creates the car table if it does not exist yet.
    pub async fn push_schema(&self) -> Result<()> {
        self.shared.pool.get().await?.push_schema().await
    }

    /// Drops the car table and recreates it empty.
    pub async fn reset_db(&self) -> Result<()> {
        self.shared.pool.get().await?.reset_db().await
    }

    /// The filter grammar understood by the underlying store.
    pub fn filter_adder(&self) -> &'static dyn FilterAdder {
        self.shared.pool.filter_adder()
    }
}
