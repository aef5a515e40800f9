//! Error types for memedit.
//!
//! Uses thiserror for derive macros. Every variant names the path it concerns
//! so a failure message is actionable without extra context.

use crate::exit_codes;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for memedit operations.
#[derive(Error, Debug)]
pub enum EditError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// The requested operation is malformed (e.g. an empty search string).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// Neither the exact nor the normalized search text was found.
    #[error("text not found in '{}'", .0.display())]
    NoMatch(PathBuf),

    /// The target file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The lock could not be acquired within the retry budget.
    #[error("could not acquire lock for '{}' after {attempts} attempts", .path.display())]
    LockTimeout { path: PathBuf, attempts: u32 },

    /// An underlying filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl EditError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        EditError::Io {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O error raised while operating on `path`.
    ///
    /// `NotFound` errors are mapped to [`EditError::NotFound`] so callers can
    /// tell a missing target apart from other failures.
    pub fn from_io_at(action: &str, path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            EditError::NotFound(path.to_path_buf())
        } else {
            EditError::io(format!("failed to {} '{}'", action, path.display()), source)
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            EditError::UserError(_) => exit_codes::USER_ERROR,
            EditError::InvalidOperation(_) => exit_codes::USER_ERROR,
            EditError::NoMatch(_) => exit_codes::NO_MATCH,
            EditError::NotFound(_) => exit_codes::NOT_FOUND,
            EditError::LockTimeout { .. } => exit_codes::LOCK_FAILURE,
            EditError::Io { .. } => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for memedit operations.
pub type Result<T> = std::result::Result<T, EditError>;
