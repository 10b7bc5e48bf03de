//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.
//!
//! Adapters construct the variant matching the operation that failed, so
//! the materializer can tag the failing step without re-mapping causes.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No payload could be resolved for a template selector.
    #[error("Template not found: {path}: {reason}")]
    TemplateNotFound { path: PathBuf, reason: String },

    /// A directory (or one of its parents) could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreationFailed { path: PathBuf, reason: String },

    /// A file could not be written, or its permissions could not be set.
    #[error("Failed to write {path}: {reason}")]
    FileWriteFailed { path: PathBuf, reason: String },

    /// Shared filesystem state failed (lock poisoned).
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { path, .. } => vec![
                format!("No template file at: {}", path.display()),
                "Built-in selectors: preset:simple, preset:multi".into(),
                "Try: stackgen list to see the available presets".into(),
            ],
            Self::DirectoryCreationFailed { path, .. } => vec![
                format!("Could not create: {}", path.display()),
                "Check that you have write permissions on the parent directory".into(),
            ],
            Self::FileWriteFailed { path, .. } => vec![
                format!("Could not write: {}", path.display()),
                "Check write permissions and free disk space".into(),
            ],
            Self::LockPoisoned => vec![
                "Filesystem state was left inconsistent by an earlier panic".into(),
                "Re-run the command".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DirectoryCreationFailed { .. } | Self::FileWriteFailed { .. } => {
                ErrorCategory::Internal
            }
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
