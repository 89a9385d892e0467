//! Dictionary store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dictionary store
#[derive(Error, Debug)]
pub enum StoreError {
    /// `dict_type` did not name one of the four categories
    #[error("Unknown dictionary type: {0}")]
    UnknownCategory(String),

    /// Structured entry value was not valid JSON for its category
    #[error("Invalid value for {category}: {error}")]
    InvalidValue { category: String, error: String },

    /// Persisted state could not be read or written
    #[error("IO error on {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Persisted state could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::UnknownCategory("settings".to_string());
        assert_eq!(err.to_string(), "Unknown dictionary type: settings");
    }
}
