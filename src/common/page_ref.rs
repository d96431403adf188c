//! Page reference type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names a requested page in a reference string.
///
/// Page numbers are non-negative integers; `u32` covers anything a
/// reference string realistically contains.
///
/// # Example
/// ```
/// use pagesim::PageRef;
///
/// let page = PageRef::new(7);
/// assert_eq!(page.0, 7);
/// assert_eq!(page.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageRef(pub u32);

impl PageRef {
    /// Create a new PageRef.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageRef(id)
    }
}

impl From<u32> for PageRef {
    fn from(id: u32) -> Self {
        PageRef(id)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a reference string from plain integers.
///
/// # Example
/// ```
/// use pagesim::{common::pages, PageRef};
///
/// assert_eq!(pages(&[1, 2]), vec![PageRef(1), PageRef(2)]);
/// ```
pub fn pages(ids: &[u32]) -> Vec<PageRef> {
    ids.iter().copied().map(PageRef).collect()
}
