//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a record with a generated id".

pub mod record_service;

pub use record_service::RecordService;
