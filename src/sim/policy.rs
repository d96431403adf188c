//! Policy names.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::Error;

/// The page replacement policies pagesim can simulate.
///
/// Variants are declared in comparison priority order: when two policies
/// fault equally often, the one declared first wins. The derived `Ord`
/// follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub enum Policy {
    /// Evict the page loaded earliest.
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,

    /// Evict the page referenced least recently.
    #[serde(rename = "LRU")]
    Lru,

    /// Evict the page whose next reference is farthest away (Belady).
    #[serde(rename = "Optimal")]
    Optimal,
}

impl Policy {
    /// All policies, in priority order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
