//! Suppression of clipboard changes made by the application itself

use std::sync::atomic::{AtomicU64, Ordering};

const RELEASED: u64 = 0;

/// Flags an in-flight internal clipboard write.
///
/// Each `engage` returns a new generation; only the matching `release`
/// clears the flag, so an older restore finishing late cannot lift the
/// guard of a newer one.
#[derive(Debug, Default)]
pub struct InternalWriteGuard {
    generation: AtomicU64,
    engaged: AtomicU64,
}

impl InternalWriteGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn engage(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.engaged.store(generation, Ordering::SeqCst);
        generation
    }

    /// Release the guard if `generation` still holds it
    pub fn release(&self, generation: u64) -> bool {
        self.engaged
            .compare_exchange(generation, RELEASED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged.load(Ordering::SeqCst) != RELEASED
    }
}
