//! Error types for dev-start.
//!
//! This module defines [`DevStartError`], the error type returned by the
//! reporter, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only the repository precondition is fatal for a run
//! - Best-effort queries (fetch, port probing) degrade to neutral values
//!   instead of producing an error
//! - Use `anyhow::Error` (via `DevStartError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dev-start operations.
#[derive(Debug, Error)]
pub enum DevStartError {
    /// The project root is not inside a Git working tree.
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// An external command could not be run or exited with a failure.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dev-start operations.
pub type Result<T> = std::result::Result<T, DevStartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_repository_displays_path() {
        let err = DevStartError::NotARepository {
            path: PathBuf::from("/tmp/scratch"),
        };
        assert!(err.to_string().contains("/tmp/scratch"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DevStartError::CommandFailed {
            command: "git status --porcelain".into(),
            code: Some(128),
        };
        let msg = err.to_string();
        assert!(msg.contains("git status --porcelain"));
        assert!(msg.contains("128"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DevStartError = io_err.into();
        assert!(matches!(err, DevStartError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: DevStartError = anyhow::anyhow!("unexpected").into();
        assert_eq!(err.to_string(), "unexpected");
    }
}
