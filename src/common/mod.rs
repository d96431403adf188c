//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers and bounds (PageRef, FrameCapacity)

pub mod config;
pub mod error;
mod frame_capacity;
mod page_ref;

pub use error::{Error, Result};
pub use frame_capacity::FrameCapacity;
pub use page_ref::{pages, PageRef};
