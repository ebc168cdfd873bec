//! Error types for the survey core

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the ambient surface of the system.
///
/// Validation failure is deliberately not represented here: a draft that
/// fails its rules comes back as a [`ValidationErrors`](crate::ValidationErrors)
/// value for the caller to display, never as an `Err`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A draft reached `commit` without passing validation first.
    #[error("draft is incomplete: missing {0}")]
    IncompleteDraft(&'static str),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
