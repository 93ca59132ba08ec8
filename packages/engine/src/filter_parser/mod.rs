//! Filter expression parsing
//!
//! Precedence climbs from `||` to `&&` to `!`/parentheses/comparisons. Singular
//! operand restrictions and function well-typedness are enforced here, so an
//! ill-typed filter never reaches the evaluator.

pub mod core;
pub mod expressions;
pub mod functions;
pub mod queries;

pub use self::core::FilterParser;
