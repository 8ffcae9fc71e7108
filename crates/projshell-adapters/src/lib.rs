//! Infrastructure adapters for projshell.
//!
//! This crate implements the ports defined in `projshell-core::application::ports`.
//! It holds everything that touches process-wide state such as the RNG.

pub mod id;

// Re-export commonly used adapters
pub use id::{FixedIdGenerator, SequenceIdGenerator, UuidV4Generator};
