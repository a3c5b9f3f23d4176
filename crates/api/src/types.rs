//! API Error Types
//!
//! Shared error taxonomy for the backend clients.

use thiserror::Error;

/// Errors raised by the backend clients.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Bad input caught before any network call.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network/connection failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the backend.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The backend answered with `success: false`.
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Result type alias for API errors.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map an HTTP error status to an [`ApiError`].
pub fn parse_http_error(status: u16, body: &str) -> ApiError {
    match status {
        404 => ApiError::NotFound(body.to_string()),
        _ => ApiError::Server {
            status,
            message: body.to_string(),
        },
    }
}
