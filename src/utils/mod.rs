//! Utilities
//!
//! Shared helpers for the application layer.

pub mod error;

pub use error::{AppError, AppResult};
