//! Core error types for path-expression parsing and evaluation.

use std::fmt;

/// Broad error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed query text or a violated static restriction
    InvalidPath,
    /// Evaluation budget breached or regex safety policy triggered
    LimitExceeded,
}

/// Which budget or policy an evaluation ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitKind {
    /// `max_nodes_visited` exhausted
    NodesVisited,
    /// `max_depth` exceeded
    Depth,
    /// Pattern longer than `max_regex_pattern_length`
    RegexPatternLength,
    /// Input string longer than `max_regex_input_length`
    RegexInputLength,
    /// Pattern rejected by the backtracking heuristics
    UnsafeRegex,
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LimitKind::NodesVisited => "node visit",
            LimitKind::Depth => "depth",
            LimitKind::RegexPatternLength => "regex pattern length",
            LimitKind::RegexInputLength => "regex input length",
            LimitKind::UnsafeRegex => "regex safety",
        };
        f.write_str(name)
    }
}

/// Main path-expression error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonPathError {
    /// The query text could not be compiled
    #[error("invalid expression '{expression}' at position {position}: {reason}")]
    InvalidExpression {
        /// Full query text
        expression: String,
        /// What went wrong
        reason: String,
        /// Character offset of the offending token
        position: usize,
    },

    /// Evaluation aborted; no partial results are produced
    #[error("{limit} limit exceeded: {message}")]
    LimitExceeded {
        /// Budget or policy that tripped
        limit: LimitKind,
        /// Details for diagnostics
        message: String,
    },
}

/// Result type for path-expression operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsonPathError::InvalidExpression { .. } => ErrorKind::InvalidPath,
            JsonPathError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
        }
    }

    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        self.kind() == ErrorKind::InvalidPath
    }

    #[must_use]
    pub fn is_limit_exceeded(&self) -> bool {
        self.kind() == ErrorKind::LimitExceeded
    }

    /// The tripped limit, for `LimitExceeded` errors
    #[must_use]
    pub fn limit(&self) -> Option<LimitKind> {
        match self {
            JsonPathError::LimitExceeded { limit, .. } => Some(*limit),
            JsonPathError::InvalidExpression { .. } => None,
        }
    }

    /// Character offset for syntax errors
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            JsonPathError::InvalidExpression { position, .. } => Some(*position),
            JsonPathError::LimitExceeded { .. } => None,
        }
    }
}
