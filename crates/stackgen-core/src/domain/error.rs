// ============================================================================
// domain/error.rs - REQUEST VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may store them in reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid {field}: {value} is outside the range 0-65535")]
    InvalidPort { field: &'static str, value: u32 },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for the {}", field),
                "Both a project path and a template selector are required".into(),
            ],
            Self::InvalidPort { field, value } => vec![
                format!("Got {} for the {}", value, field),
                "Ports must fit the unsigned 16-bit range (0-65535)".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' escapes the project root", path),
                "Artifact paths are always relative to the target directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. } | Self::InvalidPort { .. } => {
                ErrorCategory::Validation
            }
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = DomainError::MissingRequiredField { field: "template" };
        assert_eq!(err.to_string(), "Required field missing: template");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn invalid_port_carries_the_offending_value() {
        let err = DomainError::InvalidPort {
            field: "database port",
            value: 65_536,
        };
        assert!(err.to_string().contains("65536"));
        assert!(err.suggestions().iter().any(|s| s.contains("0-65535")));
    }
}
