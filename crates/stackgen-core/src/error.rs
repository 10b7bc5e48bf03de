//! Unified error handling for the stackgen core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions. Display is
//! transparent: callers get one diagnostic line, not a chain of layer
//! prefixes.

use thiserror::Error;

use crate::application::services::materialize_service::GenerationAborted;
use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
///
/// This enum wraps all possible errors that can occur when using
/// stackgen-core, providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum StackgenError {
    /// Errors from the domain layer (parameter validation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// A materialization run stopped partway through.
    #[error(transparent)]
    Aborted(#[from] GenerationAborted),
}

impl StackgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Aborted(aborted) => {
                let mut hints = aborted.source.suggestions();
                hints.push(format!(
                    "Artifacts from steps before step {} were left in place; clean the target directory before retrying",
                    aborted.step.number()
                ));
                hints
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Aborted(aborted) => aborted.source.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type StackgenResult<T> = Result<T, StackgenError>;
