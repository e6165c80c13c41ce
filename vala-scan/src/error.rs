//! Error handling module for the vala-scan CLI.
//!
//! Scanning itself never fails; every error here comes from locating and
//! reading the input, loading configuration, or writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the vala-scan CLI.
#[derive(Error, Debug)]
pub enum ScanToolError {
    /// No input path was given on the command line.
    #[error("file path isn't specified (use --path <FILE>)")]
    MissingPath,

    /// The input path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The input path names a directory.
    #[error("{} is a directory, not a file", .0.display())]
    IsDirectory(PathBuf),

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ScanToolError.
pub type Result<T> = std::result::Result<T, ScanToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_display() {
        let err = ScanToolError::MissingPath;
        assert_eq!(
            err.to_string(),
            "file path isn't specified (use --path <FILE>)"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = ScanToolError::NotFound(PathBuf::from("missing.vala"));
        assert_eq!(err.to_string(), "file not found: missing.vala");
    }

    #[test]
    fn test_is_directory_display() {
        let err = ScanToolError::IsDirectory(PathBuf::from("src"));
        assert_eq!(err.to_string(), "src is a directory, not a file");
    }

    #[test]
    fn test_config_error_display() {
        let err = ScanToolError::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ScanToolError = io_err.into();
        assert!(matches!(err, ScanToolError::Io(_)));
    }
}
