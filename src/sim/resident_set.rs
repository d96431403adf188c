//! ResidentSet - the pages currently held in frames.
//!
//! A [`ResidentSet`] is the simulator's view of memory: an ordered list of
//! resident pages bounded by the frame capacity.
//! - Pages are appended at the tail when loaded
//! - Removing a page keeps the rest in their relative order
//! - A page appears at most once

use crate::common::{FrameCapacity, PageRef};
use crate::sim::Slot;

/// Pages resident in memory, in load order (oldest first).
///
/// The order only carries meaning for FIFO, but every policy relies on it
/// for a stable display and for deterministic tie-breaks.
#[derive(Debug, Clone)]
pub struct ResidentSet {
    /// Resident pages, oldest first.
    pages: Vec<PageRef>,

    /// Upper bound on `pages.len()`.
    capacity: FrameCapacity,
}

impl ResidentSet {
    /// Create an empty set with room for `capacity` pages.
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            pages: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Check whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageRef) -> bool {
        self.pages.contains(&page)
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check whether every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity.get()
    }

    /// The capacity this set was created with.
    #[inline]
    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// The oldest resident page.
    #[inline]
    pub fn first(&self) -> Option<PageRef> {
        self.pages.first().copied()
    }

    /// Iterate resident pages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = PageRef> + '_ {
        self.pages.iter().copied()
    }

    /// Resident pages as a slice, oldest first.
    pub fn as_slice(&self) -> &[PageRef] {
        &self.pages
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Load `page` into the tail frame.
    ///
    /// The caller evicts first when the set is full.
    pub fn push(&mut self, page: PageRef) {
        debug_assert!(!self.is_full(), "push into a full resident set");
        debug_assert!(!self.contains(page), "page {} already resident", page);
        self.pages.push(page);
    }

    /// Remove `page`, shifting later pages forward.
    ///
    /// Returns `false` if the page was not resident.
    pub fn remove(&mut self, page: PageRef) -> bool {
        match self.pages.iter().position(|&p| p == page) {
            Some(index) => {
                self.pages.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot the frames, padded with [`Slot::Empty`] up to capacity.
    pub fn snapshot(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self.pages.iter().map(|&p| Slot::Occupied(p)).collect();
        slots.resize(self.capacity.get(), Slot::Empty);
        slots
    }
}
