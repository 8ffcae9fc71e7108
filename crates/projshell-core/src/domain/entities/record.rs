//! The demonstration record: identifier, name and email.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{email, error::DomainError};

/// An in-memory record holding an identifier, a name and an email.
///
/// Invariant: `id` is assigned once at construction and never changes.
/// It is private for that reason; `name` and `email` are plain fields and
/// are not re-checked when mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    id: String,
    pub name: String,
    pub email: String,
}

impl Record {
    /// Create a record with a fresh random identifier.
    ///
    /// Uses `Uuid::new_v4()`, rendered lowercase and hyphenated. Never fails
    /// and accepts empty strings.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, email)
    }

    /// Create a record around an identifier produced elsewhere.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Like [`Record::with_id`], but rejects an empty identifier or an email
    /// that fails the format check.
    ///
    /// Opt-in only. The plain constructors never validate.
    pub fn try_new_with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let record = Self::with_id(id, name, email);
        record.validate()?;
        Ok(record)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the current email is well formed.
    pub fn is_valid_email(&self) -> bool {
        email::is_valid_format(&self.email)
    }

    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::EmptyIdentifier);
        }
        if !email::check_format(&self.email)? {
            return Err(DomainError::InvalidEmail {
                email: self.email.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record{{ID: {}, Name: {}, Email: {}}}",
            self.id, self.name, self.email
        )
    }
}
