//! Function expression type system
//!
//! Declares the parameter and result kinds of every built-in function. The
//! filter parser consults these signatures so that arity and argument-kind
//! mismatches are rejected at parse time rather than during evaluation.

mod core;
mod signatures;

pub use self::core::{FunctionName, FunctionSignature, FunctionType};
