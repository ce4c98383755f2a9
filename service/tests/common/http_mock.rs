//! HTTP mock server helpers for testing outbound civic-info calls.
//!
//! A thin wrapper around `wiremock` for declarative HTTP stubbing.
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(403)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(5))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Path of the representatives endpoint on the civic-info host.
pub const REPRESENTATIVES_PATH: &str = "/civicinfo/v2/representatives";

/// A running stub server.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to hand to the client under test.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Stub `GET {path}`.
    pub fn expect_get(&self, p: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.server, Mock::given(method("GET")).and(path(p)))
    }

    /// Stub a representatives lookup for `address` authorized with `api_key`.
    pub fn expect_representatives(&self, api_key: &str, address: &str) -> StubBuilder<'_> {
        let builder = Mock::given(method("GET"))
            .and(path(REPRESENTATIVES_PATH))
            .and(query_param("key", api_key))
            .and(query_param("address", address));
        StubBuilder::new(&self.server, builder)
    }

    /// Assert every mounted `expect_times` was met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Number of requests the server has seen.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// Builder for a single stubbed response.
pub struct StubBuilder<'a> {
    server: &'a MockServer,
    builder: MockBuilder,
    response: ResponseTemplate,
    expected_calls: Option<u64>,
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a MockServer, builder: MockBuilder) -> Self {
        Self {
            server,
            builder,
            response: ResponseTemplate::new(200),
            expected_calls: None,
        }
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.response = self.response.set_body_json(body);
        self
    }

    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.response = self.response.set_body_string(body);
        self
    }

    /// Replace the response status, dropping any body set so far.
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.response = ResponseTemplate::new(status);
        self
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.response = self.response.set_delay(delay);
        self
    }

    pub fn expect_times(mut self, times: u64) -> Self {
        self.expected_calls = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut mock = self.builder.respond_with(self.response);
        if let Some(times) = self.expected_calls {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
