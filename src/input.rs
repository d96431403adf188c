//! Reference string and frame count parsing.
//!
//! Turns user-supplied text into the validated inputs the simulators take.
//! Page numbers are separated by whitespace and/or commas, so both
//! `"7 0 1 2"` and `"7,0,1,2"` are accepted.

use std::fs;
use std::path::Path;

use crate::common::config::REFERENCE_SEPARATORS;
use crate::common::{Error, FrameCapacity, PageRef, Result};

/// Parse a reference string into page references.
///
/// An empty or blank string yields an empty sequence.
///
/// # Errors
/// - `Error::InvalidReference` for the first token that is not a
///   non-negative integer; `position` counts tokens from 1
///
/// # Example
/// ```
/// use pagesim::input::parse_references;
/// use pagesim::PageRef;
///
/// let refs = parse_references("7, 0 1").unwrap();
/// assert_eq!(refs, vec![PageRef(7), PageRef(0), PageRef(1)]);
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageRef>> {
    text.split(|c: char| c.is_whitespace() || REFERENCE_SEPARATORS.contains(&c))
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<u32>()
                .map(PageRef)
                .map_err(|_| Error::InvalidReference {
                    position: index + 1,
                    token: token.to_string(),
                })
        })
        .collect()
}

/// Parse a frame count.
///
/// # Errors
/// - `Error::InvalidFrameCount` if the text is not an integer
/// - `Error::InvalidCapacity` if it is 0
pub fn parse_capacity(text: &str) -> Result<FrameCapacity> {
    let trimmed = text.trim();
    let frames: usize = trimmed
        .parse()
        .map_err(|_| Error::InvalidFrameCount(trimmed.to_string()))?;
    FrameCapacity::new(frames)
}

/// Read and parse a reference string stored in a file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - `Error::InvalidReference` as for [`parse_references`]
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<PageRef>> {
    let text = fs::read_to_string(path)?;
    parse_references(&text)
}
