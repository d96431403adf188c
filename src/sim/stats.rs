//! Simulation statistics tracking.

use std::fmt;

use serde::Serialize;

/// Counters collected while replaying a reference string.
///
/// Updated once per step by the simulator, then frozen into the
/// [`SimulationTrace`](crate::SimulationTrace).
///
/// # Example
/// ```
/// use pagesim::TraceStats;
///
/// let mut stats = TraceStats::new();
/// stats.record_fault();
/// stats.record_hit();
/// assert_eq!(stats.references(), 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page.
    pub faults: u64,

    /// Faults that also pushed another page out.
    pub evictions: u64,
}

impl TraceStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Total references processed.
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.faults as f64 / total as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ faults: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.faults,
            self.hits,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
