//! Error types for the log store
//!
//! Only [`LogError::DirectoryCreation`] and [`LogError::InvalidConfig`] ever
//! reach a caller. Write and rotation failures are reported to the diagnostic
//! sink and swallowed at the logging boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse reason behind an I/O failure, for operator-facing diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoFailureKind {
    DiskFull,
    PermissionDenied,
    NotFound,
    Other,
}

impl IoFailureKind {
    pub fn classify(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::StorageFull | io::ErrorKind::WriteZero => IoFailureKind::DiskFull,
            io::ErrorKind::PermissionDenied => IoFailureKind::PermissionDenied,
            io::ErrorKind::NotFound => IoFailureKind::NotFound,
            _ => IoFailureKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IoFailureKind::DiskFull => "disk full",
            IoFailureKind::PermissionDenied => "permission denied",
            IoFailureKind::NotFound => "file or directory not found",
            IoFailureKind::Other => "I/O error",
        }
    }
}

/// Errors produced while constructing or persisting a log store
#[derive(Debug, Error)]
pub enum LogError {
    /// The parent directory of the log file could not be created
    #[error("failed to create log directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Appending an entry to the log file failed
    #[error("failed to write log file {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Renaming the full log file out of the way failed
    #[error("failed to rotate {} to {}: {source}", from.display(), to.display())]
    FileRotation {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LogError {
    /// Classify the underlying I/O failure, if there is one
    pub fn io_kind(&self) -> Option<IoFailureKind> {
        match self {
            LogError::DirectoryCreation { source, .. }
            | LogError::FileWrite { source, .. }
            | LogError::FileRotation { source, .. } => Some(IoFailureKind::classify(source)),
            LogError::InvalidConfig(_) => None,
        }
    }
}

/// Result type alias for log store operations.
pub type Result<T> = std::result::Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kind_for_write_failure() {
        let err = LogError::FileWrite {
            path: PathBuf::from("/tmp/app.log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(err.io_kind(), Some(IoFailureKind::PermissionDenied));
    }

    #[test]
    fn test_classify_io_errors() {
        let kind = |k: io::ErrorKind| IoFailureKind::classify(&io::Error::from(k));
        assert_eq!(kind(io::ErrorKind::NotFound), IoFailureKind::NotFound);
        assert_eq!(kind(io::ErrorKind::WriteZero), IoFailureKind::DiskFull);
        assert_eq!(kind(io::ErrorKind::InvalidInput), IoFailureKind::Other);
        assert_eq!(IoFailureKind::DiskFull.as_str(), "disk full");
    }

    #[test]
    fn test_io_kind_for_invalid_config() {
        let err = LogError::InvalidConfig("max_file_size_bytes must be positive".to_string());
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn test_display_includes_paths() {
        let err = LogError::FileRotation {
            from: PathBuf::from("app.log"),
            to: PathBuf::from("app.log.2026-01-21_14-30-45"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let text = err.to_string();
        assert!(text.contains("app.log"));
        assert!(text.contains("app.log.2026-01-21_14-30-45"));
    }
}
