// ============================================================================
// domain/error.rs - RECORD DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("'{email}' is not a well-formed email address")]
    InvalidEmail { email: String },

    #[error("Record identifier must not be empty")]
    EmptyIdentifier,

    // ========================================================================
    // Internal Errors
    // ========================================================================
    #[error("email pattern '{pattern}' failed to compile: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEmail { email } => vec![
                format!("Rejected address: {email}"),
                "Expected something like: name@example.com".into(),
                "Local part may use letters, digits and . _ % + -".into(),
                "Domain must end in a dot and at least two letters".into(),
            ],
            Self::EmptyIdentifier => vec![
                "Identifiers are normally generated for you".into(),
                "If you supplied one explicitly, make sure it is non-empty".into(),
            ],
            Self::InvalidPattern { .. } => vec![
                "The built-in email pattern is broken".into(),
                "This is a bug, please report it".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEmail { .. } | Self::EmptyIdentifier => ErrorCategory::Validation,
            Self::InvalidPattern { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
