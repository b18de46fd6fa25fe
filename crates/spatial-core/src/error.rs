//! Error types for spatial-core

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for upload handling
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Request Errors
    // ===================
    #[error("No file part")]
    MissingFilePart,

    #[error("No selected file")]
    EmptyFilename,

    // ===================
    // IO Errors
    // ===================
    #[error("Failed to create directory: {path}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Processing Errors
    // ===================
    #[error("Image processing failed: {0}")]
    Processing(String),

    // ===================
    // Config Errors
    // ===================
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl CoreError {
    /// Whether the error was caused by the client's request rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, CoreError::MissingFilePart | CoreError::EmptyFilename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_render_api_messages() {
        assert_eq!(CoreError::MissingFilePart.to_string(), "No file part");
        assert_eq!(CoreError::EmptyFilename.to_string(), "No selected file");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(CoreError::EmptyFilename.is_client_error());
        assert!(!CoreError::Processing("boom".to_string()).is_client_error());

        let io = CoreError::FileWrite {
            path: PathBuf::from("/tmp/x"),
            source: std::io::Error::other("disk full"),
        };
        assert!(!io.is_client_error());
        assert_eq!(io.to_string(), "Failed to write file: /tmp/x");
    }
}
