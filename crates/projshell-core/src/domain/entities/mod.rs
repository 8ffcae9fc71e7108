pub mod record;

pub use crate::domain::DomainError;
pub use record::Record;
