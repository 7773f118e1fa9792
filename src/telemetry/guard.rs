//! Check-once state shared by every caller of a checker

use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL_GUARD: CheckGuard = CheckGuard::new();

/// Two-state flag (unchecked, checked) that can be claimed exactly once
#[derive(Debug, Default)]
pub struct CheckGuard {
    checked: AtomicBool,
}

impl CheckGuard {
    pub const fn new() -> Self {
        Self {
            checked: AtomicBool::new(false),
        }
    }

    /// The guard shared by the whole process
    pub fn global() -> &'static CheckGuard {
        &GLOBAL_GUARD
    }

    /// Moves the guard to the checked state.
    ///
    /// Returns true only for the caller that performed the transition.
    pub fn try_claim(&self) -> bool {
        self.checked
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub fn is_checked(&self) -> bool {
        self.checked.load(Ordering::Acquire)
    }
}
