//! Client Configuration
//!
//! Environment-driven configuration for the console. A `.env` file in the
//! working directory is honored when present.

/// Default backend address, matching the analysis server's default bind.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Where the console talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read configuration from `MARKETSCOPE_BASE_URL`, falling back to the
    /// default backend address.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url = std::env::var("MARKETSCOPE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
