//! Optimal (Belady) replacement policy.
//!
//! Needs the whole reference string up front: the victim is the resident
//! page whose next reference lies farthest in the future, with pages that
//! are never referenced again ranked farthest of all.

use std::collections::HashMap;

use log::trace;

use crate::common::PageRef;
use crate::sim::replacer::Replacer;
use crate::sim::ResidentSet;

/// Where a page is referenced next.
///
/// `At` sorts before `Never`, so the maximum is the farthest reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NextUse {
    At(usize),
    Never,
}

/// Evicts the resident page needed farthest in the future.
///
/// Next-use positions are computed once in a reverse pass over the
/// reference string, so each eviction costs O(capacity) rather than a
/// forward scan of the remaining input.
#[derive(Debug)]
pub struct OptimalReplacer {
    /// For each position, where the same page is referenced next.
    next_use: Vec<NextUse>,

    /// Resident page -> its next reference after the current position.
    upcoming: HashMap<PageRef, NextUse>,
}

impl OptimalReplacer {
    /// Build a replacer for `references`.
    pub fn new(references: &[PageRef]) -> Self {
        let mut next_use = vec![NextUse::Never; references.len()];
        let mut seen: HashMap<PageRef, usize> = HashMap::new();

        for (position, &page) in references.iter().enumerate().rev() {
            if let Some(&later) = seen.get(&page) {
                next_use[position] = NextUse::At(later);
            }
            seen.insert(page, position);
        }

        Self {
            next_use,
            upcoming: HashMap::new(),
        }
    }

    /// Next reference of `page` as of its last recorded access.
    pub fn next_use(&self, page: PageRef) -> NextUse {
        self.upcoming.get(&page).copied().unwrap_or(NextUse::Never)
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, page: PageRef, position: usize) {
        let next = self.next_use.get(position).copied().unwrap_or(NextUse::Never);
        self.upcoming.insert(page, next);
    }

    fn evict(&mut self, resident: &ResidentSet) -> Option<PageRef> {
        // Strict comparison keeps the earliest-loaded page among ties.
        let mut victim: Option<(PageRef, NextUse)> = None;
        for page in resident.iter() {
            let next = self.next_use(page);
            match victim {
                Some((_, farthest)) if next <= farthest => {}
                _ => victim = Some((page, next)),
            }
        }

        let (page, next) = victim?;
        trace!("optimal: evicting page {} (next use {:?})", page, next);
        self.upcoming.remove(&page);
        Some(page)
    }
}
