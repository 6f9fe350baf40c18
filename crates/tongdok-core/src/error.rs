//! Error types for Tongdok core operations.
//!
//! The reading-position resolver never returns errors; it signals unusual
//! input through sentinel values (see [`crate::position::Reading`]). The
//! error hierarchy here covers plan validation and persistence. The CLI
//! layer maps these to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Tongdok operations.
pub type Result<T> = std::result::Result<T, TongdokError>;

/// Core error type for Tongdok operations.
#[derive(Debug, Error)]
pub enum TongdokError {
    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for TongdokError {
    fn from(err: std::io::Error) -> Self {
        TongdokError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for TongdokError {
    fn from(err: rusqlite::Error) -> Self {
        TongdokError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<serde_json::Error> for TongdokError {
    fn from(err: serde_json::Error) -> Self {
        TongdokError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TongdokError::InvalidInput("chapters per day must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: chapters per day must be positive"
        );

        let err: TongdokError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, TongdokError::Validation(_)));
    }
}
