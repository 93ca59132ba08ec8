//! Error constructor functions
//!
//! Factory helpers used throughout the tokenizer, parsers and evaluator.

use super::types::{JsonPathError, LimitKind};

/// Creates an invalid expression error
///
/// # Examples
/// ```
/// use nodepath_engine::error::invalid_expression_error;
///
/// let error = invalid_expression_error("$[01]", "integers cannot have leading zeros", 2);
/// assert_eq!(error.position(), Some(2));
/// ```
pub fn invalid_expression_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    position: usize,
) -> JsonPathError {
    JsonPathError::InvalidExpression {
        expression: expression.into(),
        reason: reason.into(),
        position,
    }
}

/// Creates a limit-exceeded error
pub fn limit_exceeded_error(limit: LimitKind, message: impl Into<String>) -> JsonPathError {
    JsonPathError::LimitExceeded {
        limit,
        message: message.into(),
    }
}
