//! Lookup of vehicle details in the external registry.

use carreg_core::{async_trait, bail, err, Car, Error, Result};
use hyper::{body, client::HttpConnector, Client, StatusCode, Uri};
use url::Url;

use std::fmt::Debug;

/// Resolves a registration number to the full vehicle record.
#[async_trait]
pub trait RegistryClient: Debug + Send + Sync + 'static {
    async fn lookup(&self, reg_num: &str) -> Result<Car>;
}

/// Queries the registry over HTTP with `GET <base>?regNum=<reg_num>` and
/// decodes the JSON body as a [`Car`].
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    base: Url,
    client: Client<HttpConnector>,
}

impl HttpRegistry {
    pub fn new(base: &str) -> Result<HttpRegistry> {
        let base = Url::parse(base).map_err(Error::driver)?;

        if base.scheme() != "http" {
            bail!("registry URL must use the `http` scheme; url={}", base);
        }

        Ok(HttpRegistry {
            base,
            client: Client::new(),
        })
    }

    /// The request URI for `reg_num`. Existing query parameters are kept.
    fn uri(&self, reg_num: &str) -> Result<Uri> {
        let mut url = self.base.clone();
        url.query_pairs_mut().append_pair("regNum", reg_num);
        url.as_str().parse::<Uri>().map_err(Error::driver)
    }
}

#[async_trait]
impl RegistryClient for HttpRegistry {
    async fn lookup(&self, reg_num: &str) -> Result<Car> {
        let uri = self.uri(reg_num)?;
        tracing::debug!(%uri, "registry lookup");

        let response = self.client.get(uri).await.map_err(Error::driver)?;

        let status = response.status();
        if status != StatusCode::OK {
            bail!("registry responded with {status}");
        }

        let bytes = body::to_bytes(response.into_body())
            .await
            .map_err(Error::driver)?;

        decode_car(&bytes)
    }
}

/// Decodes a registry response body. An empty object or `null` means the
/// registry knows nothing about the number.
fn decode_car(bytes: &[u8]) -> Result<Car> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| Error::from(anyhow::Error::from(e)))?;

    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Err(err!("empty car info response"));
    }

    serde_json::from_value(value).map_err(|e| Error::from(anyhow::Error::from(e)))
}
