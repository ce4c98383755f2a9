//! Civic-info API client module.
//!
//! Provides the HTTP client abstraction used to look up the elected
//! officials for an attendee's address.
//!
//! - [`CivicInfoClient`] - Trait defining API operations
//! - [`HttpCivicClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockCivicClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! ## HTTP Stubbing
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//! use civic_rsvp::civic::HttpCivicClient;
//!
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_representatives("test-key", "90210")
//!     .respond_with_json(json!({
//!         "officials": [{ "name": "Jane Doe", "party": "Independent" }]
//!     }))
//!     .mount()
//!     .await;
//!
//! let client = HttpCivicClient::new(server.url(), "test-key");
//! let officials = client.representatives("90210").await.unwrap();
//! assert_eq!(officials[0].name, "Jane Doe");
//! ```

mod client;
mod types;

pub use client::{CivicApiError, CivicInfoClient, HttpCivicClient};
pub use types::{Office, Official, RepresentativesResponse};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
