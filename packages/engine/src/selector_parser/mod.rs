//! Segment and selector parsing
//!
//! Handles dot shorthand, descendant shorthand, bracketed selector lists,
//! array indices and slices. Filter selectors hand off to the filter parser.

pub mod bracket;
pub mod core;
pub mod dot;
pub mod slice;

pub use self::core::SelectorParser;
