//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageRef;
use crate::sim::replacer::Replacer;
use crate::sim::ResidentSet;

/// Evicts the resident page whose most recent reference is oldest.
///
/// Tracks, for each resident page, the position of its last reference.
/// Positions are unique per reference so two resident pages never share
/// one; the scan still walks the resident set in load order and keeps the
/// first minimum, which makes the choice independent of map ordering.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Page -> position of its most recent reference.
    last_used: HashMap<PageRef, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the last reference to `page`, if tracked.
    pub fn last_used(&self, page: PageRef) -> Option<usize> {
        self.last_used.get(&page).copied()
    }
}

impl Replacer for LruReplacer {
    fn record_access(&mut self, page: PageRef, position: usize) {
        self.last_used.insert(page, position);
    }

    fn evict(&mut self, resident: &ResidentSet) -> Option<PageRef> {
        // Untracked pages sort as `None`, ahead of any position.
        let victim = resident.iter().min_by_key(|&page| self.last_used(page))?;
        self.last_used.remove(&victim);
        Some(victim)
    }
}
