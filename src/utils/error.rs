//! Error Handling
//!
//! Unified error types for the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

use marketscope_api::ApiError;

/// Application-wide error type.
///
/// Validation errors block an action before any network call; submission and
/// stream failures are recorded into session state by the controller and do
/// not normally escape it; the rest surface as non-fatal notices.
#[derive(Error, Debug)]
pub enum AppError {
    /// Bad user input, caught before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The analysis job could not be started
    #[error("Submission error: {0}")]
    Submission(String),

    /// The output stream failed
    #[error("Stream error: {0}")]
    Stream(String),

    /// Report artifact not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or protocol failure talking to the backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// Chat request failed
    #[error("Chat error: {0}")]
    Chat(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a submission error
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Create a stream error
    pub fn stream(msg: impl Into<String>) -> Self {
        Self::Stream(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a chat error
    pub fn chat(msg: impl Into<String>) -> Self {
        Self::Chat(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(msg) => Self::Validation(msg),
            ApiError::NotFound(msg) => Self::NotFound(msg),
            ApiError::Network(msg)
            | ApiError::Parse(msg)
            | ApiError::Rejected(msg) => Self::Transport(msg),
            ApiError::Server { status, message } => {
                Self::Transport(format!("HTTP {status}: {message}"))
            }
        }
    }
}

/// Convert AppError to a string suitable for inline display
impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
