//! Random UUID v4 identifiers using the `uuid` crate.

use projshell_core::application::ports::IdGenerator;
use uuid::Uuid;

/// Production identifier generator.
///
/// Each call draws 122 random bits from the OS-backed RNG behind
/// `Uuid::new_v4()` and renders them as lowercase hyphenated hex
/// (8-4-4-4-12). Safe to share between threads as-is.
#[derive(Debug, Clone, Copy)]
pub struct UuidV4Generator;

impl UuidV4Generator {
    /// Create a new UUID v4 generator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidV4Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> String {
        let id = Uuid::new_v4().hyphenated().to_string();
        tracing::trace!(%id, "uuid v4 generated");
        id
    }
}
