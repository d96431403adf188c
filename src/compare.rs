//! Policy comparison.
//!
//! Runs every policy on the same input and picks the one that faults
//! least. Runs are independent: each owns its own resident set and trace.

use std::collections::BTreeMap;

use log::debug;
use serde::Serialize;

use crate::common::{FrameCapacity, PageRef, Result};
use crate::sim::{simulate_with, Policy, SimulationTrace};

/// Pick the policy with the fewest faults.
///
/// Ties go to the policy declared first (FIFO, then LRU, then Optimal),
/// whatever order `totals` yields them in. Returns `None` only when
/// `totals` is empty.
///
/// # Example
/// ```
/// use pagesim::{compare, Policy};
///
/// let best = compare([(Policy::Optimal, 3), (Policy::Lru, 4), (Policy::Fifo, 3)]);
/// assert_eq!(best, Some(Policy::Fifo));
/// ```
pub fn compare<I>(totals: I) -> Option<Policy>
where
    I: IntoIterator<Item = (Policy, u64)>,
{
    totals
        .into_iter()
        .min_by_key(|&(policy, faults)| (faults, policy))
        .map(|(policy, _)| policy)
}

/// Everything produced for one input: three traces and a winner.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    /// The reference string that was simulated.
    pub references: Vec<PageRef>,

    /// Frame count shared by every run.
    pub capacity: FrameCapacity,

    /// One trace per policy, in priority order.
    pub traces: Vec<SimulationTrace>,

    /// Total faults per policy.
    pub totals: BTreeMap<Policy, u64>,

    /// Policy with the fewest faults, ties broken by priority.
    pub best: Policy,
}

impl ComparisonResult {
    /// The trace produced by `policy`.
    pub fn trace(&self, policy: Policy) -> Option<&SimulationTrace> {
        self.traces.iter().find(|t| t.policy == policy)
    }

    /// Total faults for `policy`.
    pub fn total_faults(&self, policy: Policy) -> Option<u64> {
        self.totals.get(&policy).copied()
    }

    /// Every policy that reached the minimum fault count, in priority order.
    pub fn best_policies(&self) -> Vec<Policy> {
        let Some(min) = self.totals.values().copied().min() else {
            return Vec::new();
        };
        self.totals
            .iter()
            .filter(|&(_, &faults)| faults == min)
            .map(|(&policy, _)| policy)
            .collect()
    }
}

/// Simulate every policy on `references` and select the best.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frames` is 0; no policy is run
pub fn simulate_and_compare(references: &[PageRef], frames: usize) -> Result<ComparisonResult> {
    let capacity = FrameCapacity::new(frames)?;

    let traces: Vec<SimulationTrace> = Policy::ALL
        .iter()
        .map(|&policy| simulate_with(policy, references, capacity))
        .collect();

    let totals: BTreeMap<Policy, u64> = traces
        .iter()
        .map(|trace| (trace.policy, trace.total_faults()))
        .collect();

    let best = compare(totals.iter().map(|(&policy, &faults)| (policy, faults)))
        .unwrap_or_default();
    debug!(
        "comparison over {} references: {:?}, best {}",
        references.len(),
        totals,
        best
    );

    Ok(ComparisonResult {
        references: references.to_vec(),
        capacity,
        traces,
        totals,
        best,
    })
}
