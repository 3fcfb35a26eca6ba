//! Error types for atlas-image operations.
//!
//! This module provides the error hierarchy using `thiserror` for file I/O,
//! image loading, and CLI commands.

use thiserror::Error;

/// Result type alias for atlas-image operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Image loading errors.
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Generic I/O error wrapper.
    #[error("I/O error: {0}")]
    Generic(String),
}

/// Errors raised while loading an image into memory.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The image has no origin byte.
    #[error("image is empty: missing origin byte")]
    MissingOrigin,
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Output could not be written.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(IoError::Generic(err.to_string()))
    }
}

impl Error {
    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Io(IoError::FileNotFound { .. }) => "file_not_found",
            Self::Io(IoError::ReadFailed { .. } | IoError::MmapFailed { .. }) => "read_failed",
            Self::Io(IoError::WriteFailed { .. }) => "write_failed",
            Self::Io(IoError::Generic(_)) => "io",
            Self::Image(_) => "image",
            Self::Command(_) => "command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = IoError::FileNotFound {
            path: "/tmp/test.obj".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/test.obj");

        let err = IoError::WriteFailed {
            path: "/tmp/out".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("disk full"));

        let err = IoError::MmapFailed {
            path: "/tmp/big".to_string(),
            reason: "out of memory".to_string(),
        };
        assert!(err.to_string().contains("memory mapping"));
    }

    #[test]
    fn test_image_error_display() {
        assert_eq!(
            ImageError::MissingOrigin.to_string(),
            "image is empty: missing origin byte"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(IoError::Generic(_))));
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_error_kind() {
        let err: Error = IoError::FileNotFound {
            path: "x".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "file_not_found");

        let err: Error = IoError::WriteFailed {
            path: "x".to_string(),
            reason: "denied".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "write_failed");

        let err: Error = ImageError::MissingOrigin.into();
        assert_eq!(err.kind(), "image");

        let err: Error = CommandError::OutputFormat("closed".to_string()).into();
        assert_eq!(err.kind(), "command");
        assert_eq!(err.to_string(), "command error: output format error: closed");
    }
}
