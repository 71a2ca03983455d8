//! HTTP client abstraction for testability.

use bytes::Bytes;
use thiserror::Error;

/// Default request timeout in seconds.
///
/// The chain itself never times out; bounded latency comes entirely from
/// the transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors produced by the transport layer.
///
/// `Clone` so scripted test transports can hand the same failure out more
/// than once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Network-level or HTTP-status failure, with a human-readable message.
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Trait for non-blocking HTTP GET operations.
///
/// The abstraction exists for dependency injection: the reload chain is
/// generic over it, and tests drive the chain with mock transports.
#[allow(async_fn_in_trait)]
pub trait HttpClient: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// A non-2xx status is an error, not a payload.
    async fn get(&self, url: &str) -> Result<Bytes, ProviderError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with the default request timeout.
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a client with a custom request timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

/// A shared client can drive a chain while the caller keeps a handle to it.
impl<T: HttpClient> HttpClient for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<Bytes, ProviderError> {
        self.as_ref().get(url).await
    }
}

impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<Bytes, ProviderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ProviderError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| ProviderError::Http(format!("Failed to read response: {}", e)))
    }
}
