//! Remote file fetching for the archive export.
//!
//! Uploaded files live at external URLs; the export pulls their bytes
//! over HTTP. [`FileFetcher`] is the seam between the export handler and
//! the network so tests can substitute an in-memory stub.

use std::time::Duration;

/// Error type for a single file fetch.
///
/// Fetch failures are file-scoped: the export logs and skips the file
/// rather than aborting the archive.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("File fetch returned HTTP {0}")]
    HttpStatus(u16),
}

/// Fetches the bytes behind a previously uploaded file URL.
#[async_trait::async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Production fetcher backed by a shared reqwest client.
pub struct HttpFileFetcher {
    client: reqwest::Client,
}

impl HttpFileFetcher {
    /// Create a fetcher with a pre-configured HTTP client. The timeout
    /// bounds each individual fetch so one stalled URL cannot hold up
    /// the rest of the archive.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }
}

#[async_trait::async_trait]
impl FileFetcher for HttpFileFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
