//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every failure is a precondition violation detected before a simulation
/// starts. Once a run begins it always produces a complete trace.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference string from a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame capacity below 1.
    ///
    /// A simulation with no frames would fault on every reference and
    /// never hold anything, so it is rejected up front.
    #[error("Invalid frame capacity {0}: at least one frame is required")]
    InvalidCapacity(usize),

    /// A token in the reference string is not a page number.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidReference { position: usize, token: String },

    /// A frame count argument that does not parse as an integer.
    #[error("Invalid frame count {0:?}")]
    InvalidFrameCount(String),

    /// A policy name that matches none of FIFO, LRU or Optimal.
    #[error("Unknown policy {0:?}")]
    UnknownPolicy(String),

    /// No reference source was supplied.
    #[error("No page references given")]
    EmptyInput,
}
