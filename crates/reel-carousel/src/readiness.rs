//! Playback Readiness Tracker
//!
//! Remembers which clips have buffered enough to start. The set only grows.

use std::collections::BTreeSet;

use reel_media::ReadyState;

#[derive(Debug, Clone, Default)]
pub struct ReadinessTracker {
    ready: BTreeSet<usize>,
}

impl ReadinessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record clip `index` as ready. Returns `true` if it was not already.
    pub fn mark_ready(&mut self, index: usize) -> bool {
        let inserted = self.ready.insert(index);
        if inserted {
            tracing::debug!(index, "clip ready");
        }
        inserted
    }

    /// Ready if the element's own state says so or the clip was recorded ready
    pub fn is_ready(&self, index: usize, native: ReadyState) -> bool {
        native.has_current_data() || self.ready.contains(&index)
    }

    /// Like [`Self::is_ready`], but a native ready state is remembered so the
    /// answer never flips back to `false`.
    pub fn observe(&mut self, index: usize, native: ReadyState) -> bool {
        if native.has_current_data() {
            self.mark_ready(index);
        }
        self.ready.contains(&index)
    }

    pub fn ready_count(&self) -> usize {
        self.ready.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ready.iter().copied()
    }
}
