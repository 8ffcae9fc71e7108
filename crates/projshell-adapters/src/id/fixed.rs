//! Constant identifier stub for tests and reproducible output.

use projshell_core::application::ports::IdGenerator;

/// Always hands out the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedIdGenerator {
    id: String,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> String {
        self.id.clone()
    }
}
