//! Civic-info API client for fetching elected officials.
//!
//! The trait abstraction keeps representative lookups testable:
//!
//! - Unit tests use [`mock::MockCivicClient`]
//! - HTTP-level tests point [`HttpCivicClient`] at a `wiremock` server
//!
//! # Example
//!
//! ```ignore
//! use civic_rsvp::civic::{CivicInfoClient, HttpCivicClient};
//!
//! let client = HttpCivicClient::new("https://www.googleapis.com", "my-api-key");
//! let officials = client.representatives("90210").await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::types::{Official, RepresentativesResponse};

const REPRESENTATIVES_PATH: &str = "/civicinfo/v2/representatives";

/// Errors that can occur when calling the civic-info API.
#[derive(Debug, Error)]
pub enum CivicApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Success status with a body that is not a representatives response
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait for civic-info API operations.
///
/// Use `HttpCivicClient` for real HTTP calls, or a mock implementation
/// for testing.
#[async_trait]
pub trait CivicInfoClient: Send + Sync {
    /// Officials representing the given address (a ZIP code works).
    async fn representatives(&self, address: &str) -> Result<Vec<Official>, CivicApiError>;
}

/// HTTP-based implementation of `CivicInfoClient`.
pub struct HttpCivicClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCivicClient {
    /// Create a new client with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Create a client with a custom `reqwest::Client`.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CivicInfoClient for HttpCivicClient {
    async fn representatives(&self, address: &str) -> Result<Vec<Official>, CivicApiError> {
        let url = format!(
            "{}{REPRESENTATIVES_PATH}",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("address", address)])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CivicApiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: RepresentativesResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_officials())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{CivicApiError, CivicInfoClient, Official};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock implementation of `CivicInfoClient` for unit tests.
    ///
    /// Queue responses with `push_result`; calls beyond the queue get an
    /// empty list. Verify calls with `calls()`.
    pub struct MockCivicClient {
        results: Mutex<VecDeque<Result<Vec<Official>, CivicApiError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockCivicClient {
        pub fn new() -> Self {
            Self {
                results: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Queue the result for the next `representatives` call.
        pub fn push_result(&self, result: Result<Vec<Official>, CivicApiError>) {
            self.results.lock().unwrap().push_back(result);
        }

        /// Get all addresses passed to `representatives`.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockCivicClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CivicInfoClient for MockCivicClient {
        async fn representatives(&self, address: &str) -> Result<Vec<Official>, CivicApiError> {
            self.calls.lock().unwrap().push(address.to_string());

            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}
