//! Eviction policy implementations (replacers).
//!
//! Each replacer sees every reference through [`Replacer::record_access`]
//! and is asked for a victim through [`Replacer::evict`] when a fault hits a
//! full resident set. Everything else about a run (residency checks, fault
//! counting, snapshots) is shared and lives in the simulator.
//!
//! Implementations:
//! - [`FifoReplacer`] - evicts the page loaded earliest
//! - [`LruReplacer`] - evicts the page referenced least recently
//! - [`OptimalReplacer`] - evicts the page needed farthest in the future

mod fifo;
mod lru;
mod optimal;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::{NextUse, OptimalReplacer};

use crate::common::PageRef;
use crate::sim::ResidentSet;

/// An eviction strategy driven by the simulator.
pub trait Replacer {
    /// Record that `page` was referenced at `position` in the reference
    /// string. Called on hits and after a faulted page is loaded.
    fn record_access(&mut self, page: PageRef, position: usize);

    /// Choose a resident page to evict and forget it.
    ///
    /// Only called when `resident` is full, and must then return a page.
    fn evict(&mut self, resident: &ResidentSet) -> Option<PageRef>;
}
