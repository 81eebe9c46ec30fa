//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Form input did not satisfy the validation rules
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Submission transport failed to deliver the message
    #[error("Transport error: {0}")]
    Transport(String),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// The page script bridge returned something unusable
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Transport("connection reset".to_string());
        assert_eq!(format!("{}", err), "Transport error: connection reset");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }
}
