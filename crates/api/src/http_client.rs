//! HTTP Client Factory
//!
//! Provides a factory function for building the shared reqwest client.

use std::time::Duration;

/// Build a `reqwest::Client` for the backend.
///
/// No request timeout is set: the analysis stream stays open for the full
/// duration of a job. Connection establishment is still bounded.
pub fn build_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build reqwest client")
}
