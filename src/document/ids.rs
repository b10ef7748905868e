//! List item identifier generation.
//!
//! Identifiers combine a process-monotonic counter with a random component,
//! so two items added back-to-back can never collide the way wall-clock
//! identifiers could.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh identifier, unique within this process and
/// collision-resistant across sessions.
pub fn next_id() -> String {
    let seq = NEXT.fetch_add(1, Ordering::Relaxed);
    let salt: u32 = rand::random();
    format!("{seq:x}-{salt:08x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_under_rapid_generation() {
        let ids: HashSet<String> = (0..10_000).map(|_| next_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
