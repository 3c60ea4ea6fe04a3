//! Application layer errors.
//!
//! These errors represent failures in orchestration, not reflow logic.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Searching a directory for documents failed.
    #[error("Could not search {path}: {reason}")]
    DiscoveryFailed { path: PathBuf, reason: String },

    /// In-memory store access failed (lock poisoned).
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read and write permissions".into(),
                "Make sure the file is valid UTF-8 text".into(),
            ],
            Self::DiscoveryFailed { path, .. } => vec![
                format!("Failed to search: {}", path.display()),
                "Check that the directory is readable".into(),
            ],
            Self::StoreLockError => vec![
                "An internal lock was poisoned".into(),
                "Try again".into(),
            ],
        }
    }
}
