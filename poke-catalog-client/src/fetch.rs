use std::future::Future;

use serde_json::Value;
use tokio::time::Duration;

use crate::error::CatalogError;

/// The retrieval capability the catalog client is constructed around.
///
/// The client itself never performs network I/O; every document request is
/// delegated here, so callers own all transport policy (timeouts, retries,
/// local mirrors, test fixtures).
pub trait Fetcher {
    /// Fetch `url` and return its body parsed as JSON.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Value, CatalogError>> + Send;
}

/// Default `Fetcher` backed by a shared `reqwest` client.
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, CatalogError> {
        let resp = self.http.get(url).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }
}
