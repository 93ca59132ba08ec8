//! Core evaluator
//!
//! Walks a compiled [`Query`](crate::ast::Query) against a document. All mutable
//! state (visit counter, depth, regex cache, cycle sets) lives in a per-call
//! [`engine::EvaluationContext`] and is dropped when the call returns.

pub mod comparisons;
pub mod engine;
pub mod filter_evaluation;
pub mod limits;
pub mod node;
pub mod segments;
pub mod selectors;
pub mod values;

pub use engine::CoreJsonPathEvaluator;
pub use limits::ExecutionLimiter;
pub use node::EvalNode;
pub use values::{Operand, TypedValue};
