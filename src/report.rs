//! Text rendering of traces and comparisons.
//!
//! Each trace is drawn as a table with one column per reference:
//! ```text
//! FIFO (3 frames)
//! Reference | 1 2 3 4
//! Frame 1   | 1 1 1 4
//! Frame 2   | _ 2 2 2
//! Frame 3   | _ _ 3 3
//! Faults    | 1 2 3 4
//! ```

use std::fmt;

use crate::common::config::EMPTY_SLOT_MARKER;
use crate::compare::ComparisonResult;
use crate::sim::{Policy, SimulationTrace};

const REFERENCE_LABEL: &str = "Reference";
const FAULT_LABEL: &str = "Faults";

/// Displays one trace as a frame-by-step table.
pub struct TraceTable<'a>(pub &'a SimulationTrace);

impl TraceTable<'_> {
    fn column_width(&self) -> usize {
        let trace = self.0;
        trace
            .steps
            .iter()
            .flat_map(|step| {
                let frames = step.frames.iter().map(|slot| slot.to_string().len());
                std::iter::once(step.reference.to_string().len())
                    .chain(std::iter::once(step.fault_marker().len()))
                    .chain(frames)
            })
            .max()
            .unwrap_or(1)
    }

    fn label_width(&self) -> usize {
        let frame_label = format!("Frame {}", self.0.capacity.get()).len();
        frame_label.max(REFERENCE_LABEL.len()).max(FAULT_LABEL.len())
    }
}

impl fmt::Display for TraceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = self.0;
        let width = self.column_width();
        let label = self.label_width();

        writeln!(f, "{} ({})", trace.policy, trace.capacity)?;

        write!(f, "{:<label$} |", REFERENCE_LABEL)?;
        for page in trace.references() {
            write!(f, " {:>width$}", page.to_string())?;
        }
        writeln!(f)?;

        for frame in 0..trace.capacity.get() {
            write!(f, "{:<label$} |", format!("Frame {}", frame + 1))?;
            for step in &trace.steps {
                let slot = match step.frames.get(frame) {
                    Some(slot) => slot.to_string(),
                    None => EMPTY_SLOT_MARKER.to_string(),
                };
                write!(f, " {:>width$}", slot)?;
            }
            writeln!(f)?;
        }

        write!(f, "{:<label$} |", FAULT_LABEL)?;
        for step in &trace.steps {
            write!(f, " {:>width$}", step.fault_marker())?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Total faults: {} (hit rate {:.2}%)",
            trace.total_faults(),
            trace.stats.hit_rate() * 100.0
        )
    }
}

/// Displays a comparison: one table per policy, then a summary.
pub struct ComparisonReport<'a> {
    result: &'a ComparisonResult,
    only: Option<Policy>,
}

impl<'a> ComparisonReport<'a> {
    /// Report every policy.
    pub fn new(result: &'a ComparisonResult) -> Self {
        Self { result, only: None }
    }

    /// Limit the tables to a single policy. The summary still lists all.
    pub fn only(mut self, policy: Option<Policy>) -> Self {
        self.only = policy;
        self
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        let references: Vec<String> = result.references.iter().map(|p| p.to_string()).collect();
        writeln!(f, "References: {}", references.join(" "))?;
        writeln!(f, "Frames: {}", result.capacity.get())?;

        for trace in &result.traces {
            if self.only.is_some_and(|policy| policy != trace.policy) {
                continue;
            }
            writeln!(f)?;
            write!(f, "{}", TraceTable(trace))?;
        }

        writeln!(f)?;
        writeln!(f, "Summary")?;
        for trace in &result.traces {
            writeln!(
                f,
                "  {:<8} {:>4} faults  {:>4} hits",
                trace.policy.name(),
                trace.total_faults(),
                trace.stats.hits
            )?;
        }

        let tied: Vec<&str> = result
            .best_policies()
            .into_iter()
            .filter(|&policy| policy != result.best)
            .map(|policy| policy.name())
            .collect();
        if tied.is_empty() {
            writeln!(f, "Best policy: {}", result.best)
        } else {
            writeln!(f, "Best policy: {} (tied with {})", result.best, tied.join(", "))
        }
    }
}

/// Render one trace as a table.
pub fn render_trace(trace: &SimulationTrace) -> String {
    TraceTable(trace).to_string()
}

/// Render all traces of a comparison plus its summary.
pub fn render_comparison(result: &ComparisonResult) -> String {
    ComparisonReport::new(result).to_string()
}
