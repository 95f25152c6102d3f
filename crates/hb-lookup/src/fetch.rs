//! Fetching pages over HTTP.

use reqwest::StatusCode;
use reqwest::blocking::Client;

use crate::config::LookupConfig;
use crate::error::{LookupError, LookupResult};

/// Source of page bodies.
///
/// Implementations return the body only for a 200 response; any other
/// status is [`LookupError::Status`].
pub trait PageFetcher {
    /// Fetch the body at `url`.
    fn fetch(&self, url: &str) -> LookupResult<String>;
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the configured timeout.
    pub fn new(config: &LookupConfig) -> LookupResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("heldenblatt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LookupError::Request(e.to_string()))?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> LookupResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status();
        tracing::debug!(%url, %status, "fetched spell page");
        if status != StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .text()
            .map_err(|e| LookupError::Request(e.to_string()))
    }
}
