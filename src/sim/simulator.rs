//! Simulator - replays a reference string under one replacer.
//!
//! The [`Simulator`] owns the step-recording contract shared by every policy:
//! - Residency check and fault counting
//! - Eviction when a fault hits a full resident set
//! - A padded frame snapshot per step

use log::{debug, trace};

use crate::common::{FrameCapacity, PageRef};
use crate::sim::replacer::Replacer;
use crate::sim::{Policy, ResidentSet, SimulationTrace, StepRecord, TraceStats};

/// Replays references one at a time, delegating victim choice to `R`.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────┐
/// │                  Simulator<R>                   │
/// │  ┌──────────────┐  ┌────────────────────────┐   │
/// │  │ resident     │  │ replacer: R            │   │
/// │  │ ResidentSet  │◀─│ FIFO | LRU | Optimal   │   │
/// │  └──────────────┘  └────────────────────────┘   │
/// │  ┌──────────────┐  ┌────────────────────────┐   │
/// │  │ stats        │  │ steps: Vec<StepRecord> │   │
/// │  └──────────────┘  └────────────────────────┘   │
/// └─────────────────────────────────────────────────┘
/// ```
///
/// # Usage
/// ```
/// use pagesim::sim::{replacer::FifoReplacer, Policy, Simulator};
/// use pagesim::{common::pages, FrameCapacity};
///
/// let capacity = FrameCapacity::new(2).unwrap();
/// let sim = Simulator::new(Policy::Fifo, capacity, FifoReplacer::new());
/// let trace = sim.run(&pages(&[1, 2, 1, 3]));
/// assert_eq!(trace.total_faults(), 3);
/// ```
pub struct Simulator<R> {
    /// Policy name recorded in the trace.
    policy: Policy,

    /// Pages currently in frames.
    resident: ResidentSet,

    /// Eviction strategy.
    replacer: R,

    /// Counters for the run so far.
    stats: TraceStats,

    /// Records produced so far.
    steps: Vec<StepRecord>,
}

impl<R: Replacer> Simulator<R> {
    /// Create a simulator with empty frames.
    pub fn new(policy: Policy, capacity: FrameCapacity, replacer: R) -> Self {
        Self {
            policy,
            resident: ResidentSet::new(capacity),
            replacer,
            stats: TraceStats::new(),
            steps: Vec::new(),
        }
    }

    /// Process the reference at `position` and return its record.
    pub fn step(&mut self, position: usize, page: PageRef) -> &StepRecord {
        let fault = !self.resident.contains(page);
        let mut evicted = None;

        if fault {
            self.stats.record_fault();

            if self.resident.is_full() {
                let victim = self.replacer.evict(&self.resident);
                debug_assert!(victim.is_some(), "{}: no victim in a full set", self.policy);

                if let Some(victim) = victim {
                    self.resident.remove(victim);
                    self.stats.record_eviction();
                    evicted = Some(victim);
                }
            }

            self.resident.push(page);
        } else {
            self.stats.record_hit();
        }

        self.replacer.record_access(page, position);

        trace!(
            "{}: ref {} -> {} (evicted {:?}) frames {:?}",
            self.policy,
            page,
            if fault { "fault" } else { "hit" },
            evicted,
            self.resident.as_slice()
        );

        self.steps.push(StepRecord {
            reference: page,
            frames: self.resident.snapshot(),
            fault,
            cumulative_faults: fault.then_some(self.stats.faults),
            evicted,
        });
        &self.steps[self.steps.len() - 1]
    }

    /// Replay all `references` and return the finished trace.
    pub fn run(mut self, references: &[PageRef]) -> SimulationTrace {
        debug!(
            "{}: simulating {} references with {}",
            self.policy,
            references.len(),
            self.resident.capacity()
        );

        self.steps.reserve(references.len());
        for (position, &page) in references.iter().enumerate() {
            self.step(position, page);
        }

        self.finish()
    }

    /// Stop and return the trace recorded so far.
    pub fn finish(self) -> SimulationTrace {
        debug!("{}: finished, {}", self.policy, self.stats);

        SimulationTrace {
            policy: self.policy,
            capacity: self.resident.capacity(),
            steps: self.steps,
            stats: self.stats,
        }
    }

    /// Pages currently resident.
    pub fn resident(&self) -> &ResidentSet {
        &self.resident
    }

    /// Counters for the run so far.
    pub fn stats(&self) -> &TraceStats {
        &self.stats
    }
}
