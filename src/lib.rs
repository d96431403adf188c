//! pagesim - A page replacement simulator comparing FIFO, LRU and Optimal.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Front end (main.rs) + input/ + report/            │   │
//! │  │   reference string → parse → compare → table | JSON      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Comparison (compare.rs)                     │   │
//! │  │    simulate_and_compare → three traces → arg-min         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Simulation (sim/)                       │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers: FIFO | LRU | Optimal             │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + ResidentSet + SimulationTrace           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageRef, FrameCapacity, Error, config)
//! - [`sim`] - The simulator loop and eviction policies
//! - [`compare`] - Running all policies and choosing the best
//! - [`input`] - Parsing reference strings and frame counts
//! - [`report`] - Text tables for traces and comparisons
//!
//! # Quick Start
//! ```
//! use pagesim::{input::parse_references, simulate_and_compare, Policy};
//!
//! let refs = parse_references("7 0 1 2 0 3 0 4 2 3 0 3 2 1 2 0 1 7 0 1").unwrap();
//! let result = simulate_and_compare(&refs, 3).unwrap();
//!
//! assert_eq!(result.total_faults(Policy::Fifo), Some(15));
//! assert_eq!(result.total_faults(Policy::Lru), Some(12));
//! assert_eq!(result.total_faults(Policy::Optimal), Some(9));
//! assert_eq!(result.best, Policy::Optimal);
//! ```

pub mod common;
pub mod compare;
pub mod input;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, FrameCapacity, PageRef, Result};
pub use compare::{compare, simulate_and_compare, ComparisonResult};
pub use sim::{simulate, Policy, SimulationTrace, Slot, StepRecord, TraceStats};
