//! Record Service - record construction with an injected id source.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::IdGenerator},
    domain::{DomainValidator, Record},
    error::CoreResult,
};

/// Service that builds records using an injected [`IdGenerator`].
pub struct RecordService {
    ids: Box<dyn IdGenerator>,
}

impl RecordService {
    /// Create a new record service.
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Build a record with a fresh identifier. No validation.
    #[instrument(skip_all)]
    pub fn create(&self, name: impl Into<String>, email: impl Into<String>) -> Record {
        let record = Record::with_id(self.ids.generate(), name, email);
        debug!(id = record.id(), "Record created");
        record
    }

    /// Build a record and reject it if the id is empty or the email is
    /// malformed.
    #[instrument(skip_all)]
    pub fn create_validated(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> CoreResult<Record> {
        let id = self.ids.generate();
        if id.is_empty() {
            return Err(ApplicationError::IdGeneration {
                reason: "generator returned an empty identifier".into(),
            }
            .into());
        }

        let record = Record::with_id(id, name, email);
        DomainValidator::validate_record(&record)?;
        debug!(id = record.id(), "Validated record created");
        Ok(record)
    }

    /// Whether `record` carries a well-formed email.
    pub fn is_valid_email(&self, record: &Record) -> bool {
        record.is_valid_email()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockIdGenerator;
    use crate::domain::DomainError;
    use crate::error::CoreError;

    fn service_returning(id: &'static str) -> RecordService {
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().returning(move || id.to_owned());
        RecordService::new(Box::new(ids))
    }

    #[test]
    fn create_uses_injected_id() {
        let service = service_returning("fixed-1");
        let record = service.create("Jane", "jane@example.com");
        assert_eq!(record.id(), "fixed-1");
        assert_eq!(record.name, "Jane");
        assert_eq!(record.email, "jane@example.com");
    }

    #[test]
    fn create_calls_generator_once() {
        let mut ids = MockIdGenerator::new();
        ids.expect_generate()
            .times(1)
            .returning(|| "once".to_owned());
        let service = RecordService::new(Box::new(ids));
        let _ = service.create("a", "b");
    }

    #[test]
    fn create_does_not_validate() {
        let service = service_returning("fixed-1");
        let record = service.create("", "nope");
        assert!(!service.is_valid_email(&record));
    }

    #[test]
    fn create_validated_accepts_good_email() {
        let service = service_returning("fixed-1");
        let record = service
            .create_validated("Jane", "jane@example.com")
            .unwrap();
        assert_eq!(
            record.to_string(),
            "Record{ID: fixed-1, Name: Jane, Email: jane@example.com}"
        );
    }

    #[test]
    fn create_validated_rejects_bad_email() {
        let service = service_returning("fixed-1");
        let err = service.create_validated("Jane", "test @example.com").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn create_validated_rejects_empty_id() {
        let service = service_returning("");
        let err = service
            .create_validated("Jane", "jane@example.com")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::IdGeneration { .. })
        ));
    }
}
