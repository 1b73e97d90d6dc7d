//! Error types for loading and saving settings files.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by codec functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while loading or saving a settings file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file extension has no registered codec.
    #[error("unknown configuration format {extension:?} for {path}")]
    UnknownFormat { path: PathBuf, extension: String },

    /// The value could not be encoded.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The file contents could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The settings path is absolute or climbs out of the application directory.
    #[error("settings path {path} must stay inside the application directory")]
    InvalidPath { path: PathBuf },

    /// No platform configuration directory could be determined.
    #[error("could not determine platform config directory")]
    NoConfigDir,

    /// Reading, writing or creating directories failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns true if this is an I/O error of kind `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_message_names_extension_and_path() {
        let err = StoreError::UnknownFormat {
            path: PathBuf::from("file.xyz"),
            extension: "xyz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"xyz\""));
        assert!(msg.contains("file.xyz"));
    }

    #[test]
    fn test_io_error_is_transparent() {
        let err = StoreError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.to_string(), "denied");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_path_message_names_path() {
        let err = StoreError::InvalidPath {
            path: PathBuf::from("/etc/passwd"),
        };
        assert!(err.to_string().contains("/etc/passwd"));
    }

    #[test]
    fn test_is_not_found() {
        let err = StoreError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert!(!StoreError::NoConfigDir.is_not_found());
    }
}
