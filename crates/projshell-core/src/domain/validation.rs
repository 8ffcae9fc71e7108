use crate::domain::{email, entities::Record, error::DomainError};

/// Centralized domain validation.
///
/// Records are never validated implicitly; callers that want
/// construction-time guarantees go through here or
/// [`Record::try_new_with_id`].
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_record(record: &Record) -> Result<(), DomainError> {
        record.validate()
    }

    pub fn validate_email(address: &str) -> Result<(), DomainError> {
        if email::check_format(address)? {
            Ok(())
        } else {
            Err(DomainError::InvalidEmail {
                email: address.to_owned(),
            })
        }
    }
}
