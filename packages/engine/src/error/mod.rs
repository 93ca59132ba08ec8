//! Path-expression error handling module
//!
//! Syntax errors and resource-limit errors share one error type; expression-level
//! non-matches (type mismatches, non-compiling patterns, missing members) are never
//! errors and resolve inside the evaluator.

pub mod constructors;
mod types;

pub use constructors::{invalid_expression_error, limit_exceeded_error};
pub use types::{ErrorKind, JsonPathError, JsonPathResult, LimitKind};
