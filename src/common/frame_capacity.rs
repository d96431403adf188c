//! Frame capacity type.

use std::fmt;

use serde::Serialize;

use super::{Error, Result};

/// Number of frames available to a simulation.
///
/// Always at least 1. The only way to build one is [`FrameCapacity::new`],
/// which rejects zero, so simulators never have to re-check the bound.
///
/// # Example
/// ```
/// use pagesim::FrameCapacity;
///
/// let capacity = FrameCapacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(FrameCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FrameCapacity(usize);

impl FrameCapacity {
    /// Create a validated capacity.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `frames` is 0
    pub fn new(frames: usize) -> Result<Self> {
        if frames == 0 {
            return Err(Error::InvalidCapacity(frames));
        }
        Ok(FrameCapacity(frames))
    }

    /// Number of frames.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for FrameCapacity {
    type Error = Error;

    fn try_from(frames: usize) -> Result<Self> {
        FrameCapacity::new(frames)
    }
}

impl fmt::Display for FrameCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.0)
    }
}
