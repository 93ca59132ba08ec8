//! Built-in function extensions
//!
//! `length`, `count`, `match`, `search` and `value`, plus the per-evaluation
//! regex cache and the static safety policy applied to `match`/`search` patterns.

pub mod function_evaluator;
pub mod regex_cache;
pub mod regex_safety;

pub use regex_cache::{RegexCache, RegexUsage};
pub use regex_safety::unsafe_pattern_reason;
