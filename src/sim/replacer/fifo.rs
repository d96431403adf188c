//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageRef;
use crate::sim::replacer::Replacer;
use crate::sim::ResidentSet;

/// Evicts pages in the order they were loaded.
///
/// Re-referencing a resident page does not move it in the queue, so the
/// victim is always uniquely determined by load order.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Pages in load order (front = oldest).
    queue: VecDeque<PageRef>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageRef>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages tracked.
    pub fn size(&self) -> usize {
        self.in_queue.len()
    }
}

impl Replacer for FifoReplacer {
    /// Only adds to the queue if not already present.
    fn record_access(&mut self, page: PageRef, _position: usize) {
        if self.in_queue.insert(page) {
            self.queue.push_back(page);
        }
    }

    /// Every queued page is resident: pages leave only through here.
    fn evict(&mut self, _resident: &ResidentSet) -> Option<PageRef> {
        let page = self.queue.pop_front()?;
        self.in_queue.remove(&page);
        Some(page)
    }
}
