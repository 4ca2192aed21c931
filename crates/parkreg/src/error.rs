//! Error types for parkreg.
//!
//! This module defines all error types used throughout the parkreg crate,
//! separating the recoverable validation failure from storage and
//! configuration failures that abort the current action.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for parkreg operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registration Errors ===
    /// A registration was rejected because a required field is empty.
    #[error("{message}")]
    Validation {
        /// User-facing message describing the problem.
        message: String,
    },

    // === Record Store Errors ===
    /// The stored record mapping is present but cannot be parsed.
    #[error("stored records under '{namespace}' are corrupt: {source}")]
    CorruptState {
        /// Namespace key holding the corrupt value.
        namespace: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A write would exceed the storage quota.
    #[error("storage quota exceeded writing '{key}': {size} bytes exceeds quota of {quota} bytes")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Size of the value that was rejected, in bytes.
        size: usize,
        /// Configured quota, in bytes.
        quota: usize,
    },

    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for parkreg operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new validation error with a user-facing message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a corrupt-state error for the given namespace.
    #[must_use]
    pub fn corrupt_state(namespace: impl Into<String>, source: serde_json::Error) -> Self {
        Self::CorruptState {
            namespace: namespace.into(),
            source,
        }
    }

    /// Check if this error is a recoverable validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error indicates corrupt persisted state.
    #[must_use]
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, Self::CorruptState { .. })
    }

    /// Check if this error is a storage quota failure.
    #[must_use]
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<i32>("not valid json").unwrap_err()
    }

    #[test]
    fn test_validation_display() {
        let err = Error::validation("Fill in all fields!");
        assert_eq!(err.to_string(), "Fill in all fields!");
        assert!(err.is_validation());
        assert!(!err.is_corrupt_state());
    }

    #[test]
    fn test_corrupt_state_display() {
        let err = Error::corrupt_state("cars", json_error());
        let msg = err.to_string();
        assert!(msg.contains("'cars'"));
        assert!(msg.contains("corrupt"));
        assert!(err.is_corrupt_state());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_quota_exceeded_display() {
        let err = Error::QuotaExceeded {
            key: "cars".to_string(),
            size: 120,
            quota: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("120"));
        assert!(msg.contains("100"));
        assert!(err.is_quota_exceeded());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let err: Error = json_error().into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_from_rusqlite_error() {
        let result = rusqlite::Connection::open_with_flags(
            "/nonexistent/path/db.sqlite",
            rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY,
        );
        if let Err(sqlite_err) = result {
            let err: Error = sqlite_err.into();
            assert!(matches!(err, Error::DatabaseQuery(_)));
        }
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "namespace must not be empty".to_string(),
        };
        assert!(err.to_string().contains("namespace must not be empty"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        assert!(err.to_string().contains("/root/forbidden"));
    }
}
