//! Selector application
//!
//! Each selector appends its matches for one input node to the output nodelist.
//! Selectors never deduplicate.

pub mod arrays;
pub mod core;
pub mod filters;

pub use arrays::{normalize_index, slice_indices};
