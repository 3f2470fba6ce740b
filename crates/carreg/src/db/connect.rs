use carreg_core::{
    async_trait,
    driver::{Connection, Driver},
    Error, Result,
};

use url::Url;

/// A driver chosen by the scheme of a connection URL.
#[derive(Debug)]
pub struct Connect {
    url: Url,
    table: String,
}

impl Connect {
    pub fn new(url: &str, table: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver)?;
        Ok(Self {
            url,
            table: table.to_string(),
        })
    }
}

#[async_trait]
impl Driver for Connect {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        match self.url.scheme() {
            "postgresql" | "postgres" => connect_postgresql(&self.url, &self.table).await,
            scheme => Err(carreg_core::err!(
                "unsupported database; scheme={scheme}; url={}",
                self.url
            )),
        }
    }
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &Url, table: &str) -> Result<Box<dyn Connection>> {
    carreg_driver_postgresql::PostgreSQL::new(url.as_str())?
        .table(table)
        .connect()
        .await
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &Url, _table: &str) -> Result<Box<dyn Connection>> {
    carreg_core::bail!("`postgresql` feature not enabled")
}
