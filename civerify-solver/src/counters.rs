use std::sync::atomic::{AtomicU64, Ordering};

use crate::outcome::Outcome;

/// Shared per-run tallies, updated from any worker thread.
///
/// Each field is independently atomic; no field's update needs to be
/// serialised with another's, so these live outside the list mutex.
#[derive(Debug, Default)]
pub struct Counters {
    pub zeros_found: AtomicU64,
    pub bisections: AtomicU64,
    pub parts_failed: AtomicU64,
    pub parts_discarded_enclosure: AtomicU64,
    pub parts_discarded_newton: AtomicU64,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the counter matching `outcome`.
    pub fn record(&self, outcome: &Outcome) {
        let target = match outcome {
            Outcome::CertifiedZero(_) => &self.zeros_found,
            Outcome::Undecided => &self.bisections,
            Outcome::Failed => &self.parts_failed,
            Outcome::DiscardedByEnclosure => &self.parts_discarded_enclosure,
            Outcome::DiscardedByNewton => &self.parts_discarded_newton,
        };
        target.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            zeros_found: self.zeros_found.load(Ordering::Relaxed),
            bisections: self.bisections.load(Ordering::Relaxed),
            parts_failed: self.parts_failed.load(Ordering::Relaxed),
            parts_discarded_enclosure: self.parts_discarded_enclosure.load(Ordering::Relaxed),
            parts_discarded_newton: self.parts_discarded_newton.load(Ordering::Relaxed),
        }
    }
}

/// A plain-value read of [`Counters`] taken at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub zeros_found: u64,
    pub bisections: u64,
    pub parts_failed: u64,
    pub parts_discarded_enclosure: u64,
    pub parts_discarded_newton: u64,
}
