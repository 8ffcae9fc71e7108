// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for projshell.
//!
//! This module contains pure logic with no I/O. Identifier generation that
//! must be swappable is reached through the `IdGenerator` port defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value entities**: `Record` is Clone + PartialEq
//! - **Behavior on the entity**: formatting and the email check live on `Record`
//!
// Public API - what the world sees
pub mod email;
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use email::{EMAIL_PATTERN, check_format, is_valid_format};
pub use entities::record::Record;
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
