//! Normalized paths
//!
//! Canonical bracket-and-quote rendering of a node location (`$['store']['book'][0]`),
//! the typed element sequence behind it and a parser that reads the canonical
//! form back.

mod generator;
mod operations;
mod parser;
mod types;

pub use generator::format_path;
pub use types::{NormalizedPath, PathElement};
