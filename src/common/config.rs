//! Configuration constants for pagesim.

/// Marker drawn for a frame that holds no page.
///
/// Never a valid [`PageRef`](crate::PageRef) rendering, since page
/// references are always printed as decimal digits.
pub const EMPTY_SLOT_MARKER: &str = "_";

/// Marker drawn in the fault row for a step that hit.
pub const NO_FAULT_MARKER: &str = "-";

/// Frame count used by the CLI when `--frames` is not given.
///
/// Three frames is the classic textbook setting and matches the
/// default most worked examples start from.
pub const DEFAULT_FRAMES: usize = 3;

/// Characters accepted between page numbers in a reference string,
/// in addition to whitespace.
pub const REFERENCE_SEPARATORS: &[char] = &[','];
