//! Bounded undo log of raster snapshots.
//!
//! INVARIANTS
//! ==========
//! - Never empty once constructed: there is always a top entry, and it equals
//!   the raster currently on screen.
//! - Never longer than `capacity`; the oldest entry is evicted first.
//! - `undo` refuses to remove the last remaining entry.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::snapshot::RasterSnapshot;

pub struct HistoryStack {
    entries: VecDeque<RasterSnapshot>,
    capacity: usize,
}

impl HistoryStack {
    /// Create a stack holding just `initial`. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(initial: RasterSnapshot, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity + 1);
        entries.push_back(initial);
        Self { entries, capacity }
    }

    /// Number of retained snapshots (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The most recent snapshot, matching the visible raster.
    #[must_use]
    pub fn top(&self) -> &RasterSnapshot {
        // The deque is never empty: construction seeds it and `undo` keeps one.
        &self.entries[self.entries.len() - 1]
    }

    /// Append a snapshot, evicting the oldest when over capacity.
    pub fn push(&mut self, snapshot: RasterSnapshot) {
        self.entries.push_back(snapshot);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Discard the top entry and return the new top to restore from.
    ///
    /// Returns `None` (and changes nothing) when only one entry remains.
    pub fn undo(&mut self) -> Option<&RasterSnapshot> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop_back();
        self.entries.back()
    }

    /// Drop all entries and start over from `blank`.
    pub fn reset(&mut self, blank: RasterSnapshot) {
        self.entries.clear();
        self.entries.push_back(blank);
    }
}
