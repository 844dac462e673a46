//! Revision counters for staleness tracking.
//!
//! Every mutable entity (the dataset itself, the point table, the cell table)
//! carries a [`RevisionClock`]: a monotonically non-decreasing counter bumped
//! on each observable mutation. Derived caches stamp the revision they were
//! computed at and recompute only when the effective revision has moved past
//! the stamp.

use serde::{Deserialize, Serialize};

/// Monotonic revision counter.
///
/// Starts at 1 so a zero stamp always reads as stale. No wraparound handling;
/// a `u64` counter outlives any realistic process.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevisionClock(u64);

impl Default for RevisionClock {
    fn default() -> Self {
        Self(1)
    }
}

impl RevisionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter by one.
    #[inline]
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    /// Current revision.
    #[inline]
    pub fn current(&self) -> u64 {
        self.0
    }
}
