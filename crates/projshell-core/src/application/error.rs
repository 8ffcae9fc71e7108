//! Application layer errors.
//!
//! These errors represent failures in orchestration, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// An identifier generator produced something unusable.
    #[error("Identifier generation failed: {reason}")]
    IdGeneration { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IdGeneration { reason } => vec![
                format!("Generator problem: {}", reason),
                "Switch to the default uuid id strategy".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IdGeneration { .. } => ErrorCategory::Internal,
        }
    }
}
