//! Application layer for projshell.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RecordService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! domain rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::RecordService;

// Re-export port traits (for adapter implementation)
pub use ports::IdGenerator;

pub use error::ApplicationError;
