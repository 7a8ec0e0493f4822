//! Application error taxonomy.
//!
//! Distinguishes the failure classes the pipeline cares about: local validation,
//! server-reported failures, transport failures, local IO, settings storage and
//! internal invariants. Everything raised inside a dispatch terminates in a
//! display state; only commands outside the pipeline propagate these up to the
//! binary entry point.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Input rejected before any network traffic happens.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An HTTP response arrived, but its status reports failure. Carries the
    /// server's own message when the body provides one.
    #[error("API error: {0}")]
    Api(String),

    /// The request could not complete: connection failure, non-JSON body, or a
    /// success body with an invalid shape.
    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
