//! Deterministic `<prefix>-<n>` identifiers.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use projshell_core::application::ports::IdGenerator;

/// Identifier generator that counts upward from a starting value.
///
/// Clones share the same counter, so ids stay unique across every handle.
#[derive(Debug, Clone)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: Arc<AtomicU64>,
}

impl SequenceIdGenerator {
    /// Start a sequence at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    /// Start a sequence at `start`.
    pub fn starting_at(prefix: impl Into<String>, start: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: Arc::new(AtomicU64::new(start)),
        }
    }

    /// The value the next call to `generate` will use.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(prefix = %self.prefix, n, "sequence id generated");
        if self.prefix.is_empty() {
            n.to_string()
        } else {
            format!("{}-{}", self.prefix, n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn counts_from_one() {
        let ids = SequenceIdGenerator::new("rec");
        assert_eq!(ids.generate(), "rec-1");
        assert_eq!(ids.generate(), "rec-2");
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn empty_prefix_is_bare_number() {
        let ids = SequenceIdGenerator::starting_at("", 40);
        assert_eq!(ids.generate(), "40");
    }

    #[test]
    fn clones_share_counter() {
        let a = SequenceIdGenerator::new("x");
        let b = a.clone();
        assert_eq!(a.generate(), "x-1");
        assert_eq!(b.generate(), "x-2");
    }

    #[test]
    fn unique_across_threads() {
        let ids = SequenceIdGenerator::new("t");
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = ids.clone();
                thread::spawn(move || (0..100).map(|_| ids.generate()).collect::<Vec<_>>())
            })
            .collect();

        let all: HashSet<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(all.len(), 800);
    }
}
