//! Page Fetcher Module
//!
//! The remote fetch collaborator and its reqwest-backed implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::Result;

// == Page Fetcher Contract ==
/// Fetches the textual body of a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

// == HTTP Fetcher ==
/// Plain GET over a shared reqwest client.
///
/// The body is returned whatever the status code. No timeout is set, so a
/// stalled server blocks the caller.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
