//! Per-step records and full simulation traces.

use std::fmt;

use serde::Serialize;

use crate::common::config::{EMPTY_SLOT_MARKER, NO_FAULT_MARKER};
use crate::common::{FrameCapacity, PageRef};
use crate::sim::{Policy, TraceStats};

/// One frame cell in a step snapshot.
///
/// Serializes as the page number, or `null` for an empty frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Slot {
    Occupied(PageRef),
    Empty,
}

impl Slot {
    /// The page held in this slot, if any.
    pub fn page(&self) -> Option<PageRef> {
        match self {
            Slot::Occupied(page) => Some(*page),
            Slot::Empty => None,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Occupied(page) => write!(f, "{}", page),
            Slot::Empty => f.write_str(EMPTY_SLOT_MARKER),
        }
    }
}

/// What happened when one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// The page that was referenced.
    pub reference: PageRef,

    /// Frame contents after the step, padded to capacity.
    pub frames: Vec<Slot>,

    /// True if the page was not resident before the step.
    pub fault: bool,

    /// Running fault total, present only on faulting steps.
    pub cumulative_faults: Option<u64>,

    /// Page removed to make room, if the step evicted.
    pub evicted: Option<PageRef>,
}

impl StepRecord {
    /// Text for the fault row: the running total, or `-` on a hit.
    pub fn fault_marker(&self) -> String {
        match self.cumulative_faults {
            Some(count) => count.to_string(),
            None => NO_FAULT_MARKER.to_string(),
        }
    }

    /// Resident pages after the step, without padding.
    pub fn resident(&self) -> impl Iterator<Item = PageRef> + '_ {
        self.frames.iter().filter_map(Slot::page)
    }
}

/// The complete record of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTrace {
    /// Policy that produced this trace.
    pub policy: Policy,

    /// Frame count used for the run.
    pub capacity: FrameCapacity,

    /// One record per input reference, in order.
    pub steps: Vec<StepRecord>,

    /// Counters accumulated over the run.
    pub stats: TraceStats,
}

impl SimulationTrace {
    /// Total number of page faults.
    #[inline]
    pub fn total_faults(&self) -> u64 {
        self.stats.faults
    }

    /// Number of processed references.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the run processed no references.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Referenced pages in order.
    pub fn references(&self) -> impl Iterator<Item = PageRef> + '_ {
        self.steps.iter().map(|step| step.reference)
    }
}
