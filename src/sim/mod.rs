//! Page replacement simulation.
//!
//! A simulation replays a reference string against a fixed number of frames
//! and records what every reference did to memory.
//!
//! # Components
//! - [`Simulator`] - The shared replay loop, generic over a replacer
//! - [`ResidentSet`] - The pages currently held in frames
//! - [`SimulationTrace`] / [`StepRecord`] / [`Slot`] - Recorded output
//! - [`TraceStats`] - Hit/fault/eviction counters
//! - [`replacer`] - Eviction policy implementations
//!
//! # Example
//! ```
//! use pagesim::sim::{simulate, Policy};
//! use pagesim::common::pages;
//!
//! let trace = simulate(Policy::Lru, &pages(&[1, 2, 3, 1, 4]), 3).unwrap();
//! assert_eq!(trace.total_faults(), 4);
//! assert_eq!(trace.steps[4].evicted.map(|p| p.0), Some(2));
//! ```

mod policy;
pub mod replacer;
mod resident_set;
mod simulator;
mod stats;
mod trace;

pub use policy::Policy;
pub use resident_set::ResidentSet;
pub use simulator::Simulator;
pub use stats::TraceStats;
pub use trace::{SimulationTrace, Slot, StepRecord};

use crate::common::{FrameCapacity, PageRef, Result};
use replacer::{FifoReplacer, LruReplacer, OptimalReplacer};

/// Run `policy` over `references` with `frames` frames.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frames` is 0
pub fn simulate(policy: Policy, references: &[PageRef], frames: usize) -> Result<SimulationTrace> {
    let capacity = FrameCapacity::new(frames)?;
    Ok(simulate_with(policy, references, capacity))
}

/// Run `policy` with an already validated capacity.
pub fn simulate_with(
    policy: Policy,
    references: &[PageRef],
    capacity: FrameCapacity,
) -> SimulationTrace {
    match policy {
        Policy::Fifo => Simulator::new(policy, capacity, FifoReplacer::new()).run(references),
        Policy::Lru => Simulator::new(policy, capacity, LruReplacer::new()).run(references),
        Policy::Optimal => {
            Simulator::new(policy, capacity, OptimalReplacer::new(references)).run(references)
        }
    }
}

/// Simulate FIFO replacement.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frames` is 0
pub fn fifo(references: &[PageRef], frames: usize) -> Result<SimulationTrace> {
    simulate(Policy::Fifo, references, frames)
}

/// Simulate LRU replacement.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frames` is 0
pub fn lru(references: &[PageRef], frames: usize) -> Result<SimulationTrace> {
    simulate(Policy::Lru, references, frames)
}

/// Simulate Optimal (Belady) replacement.
///
/// # Errors
/// - `Error::InvalidCapacity` if `frames` is 0
pub fn optimal(references: &[PageRef], frames: usize) -> Result<SimulationTrace> {
    simulate(Policy::Optimal, references, frames)
}
