use super::{Connect, Db, Pool, PoolConfig};

use carreg_core::{driver::Driver, Result};

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Builder {
    /// Name of the car table
    table: String,

    pool: PoolConfig,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            table: "cars".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl Builder {
    /// Set the name of the car table
    pub fn table(&mut self, table: &str) -> &mut Self {
        self.table = table.to_string();
        self
    }

    /// Caps the number of simultaneously open connections.
    pub fn max_pool_size(&mut self, max_size: usize) -> &mut Self {
        self.pool.max_size = max_size;
        self
    }

    /// How long a caller waits for a free connection before failing.
    pub fn pool_wait_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.pool.timeouts.wait = Some(timeout);
        self
    }

    /// Connects to the store at `url`. The URL scheme selects the driver.
    pub async fn connect(&self, url: &str) -> Result<Db> {
        self.build(Connect::new(url, &self.table)?).await
    }

    pub async fn build(&self, driver: impl Driver) -> Result<Db> {
        let pool = Pool::new(driver, self.pool.clone()).await?;
        Ok(Db::from_pool(pool))
    }
}
