//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `projshell-adapters` crate provides implementations.

/// Port for unique identifier generation.
///
/// Implemented by:
/// - `projshell_adapters::id::UuidV4Generator` (production)
/// - `projshell_adapters::id::SequenceIdGenerator` (deterministic)
/// - `projshell_adapters::id::FixedIdGenerator` (testing)
///
/// ## Design Notes
///
/// - Implementations must be usable from several threads without external
///   locking.
/// - Generation cannot fail; an empty string is treated as a generator
///   bug by `RecordService`.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Produce a fresh identifier.
    fn generate(&self) -> String;
}
