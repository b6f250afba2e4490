//! Error types for the Rock core library.

use thiserror::Error;

/// Errors that can occur during core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RockError {
    /// A path alias with no registered target. Recoverable: callers fall
    /// back to treating the original string as a literal path.
    #[error("invalid path alias: {0}")]
    InvalidAlias(String),

    /// Error serializing/deserializing JSON
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for RockError {
    fn from(err: serde_json::Error) -> Self {
        RockError::JsonError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type RockResult<T> = Result<T, RockError>;
