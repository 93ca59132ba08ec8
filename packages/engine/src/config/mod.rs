//! Evaluation options
//!
//! Budgets and policy switches for a single evaluation. Options can be built in
//! code or deserialized from JSON configuration.

mod validation;

pub use validation::{ConfigResult, ConfigurationError, Validator};

use serde::Deserialize;

/// Default ceiling on node visits per evaluation
pub const DEFAULT_MAX_NODES_VISITED: usize = 100_000;
/// Default ceiling on nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default ceiling on regex pattern length, in characters
pub const DEFAULT_MAX_REGEX_PATTERN_LENGTH: usize = 256;
/// Default ceiling on regex input length, in characters
pub const DEFAULT_MAX_REGEX_INPUT_LENGTH: usize = 1_024;

/// Per-evaluation options
///
/// ```
/// use nodepath_engine::config::QueryOptions;
///
/// let options = QueryOptions::new()
///     .with_max_nodes_visited(500)
///     .with_reject_unsafe_regex(false);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct QueryOptions {
    /// Total node visits allowed, counted across traversal, filters and equality checks
    pub max_nodes_visited: usize,
    /// Depth allowed for nested filter selectors, plus descendant paths and
    /// structural equality below the innermost filter
    pub max_depth: usize,
    pub max_regex_pattern_length: usize,
    pub max_regex_input_length: usize,
    /// Reject patterns prone to catastrophic backtracking
    pub reject_unsafe_regex: bool,
    /// Surface syntax and limit errors instead of mapping them to `None`
    pub throw_on_error: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_nodes_visited: DEFAULT_MAX_NODES_VISITED,
            max_depth: DEFAULT_MAX_DEPTH,
            max_regex_pattern_length: DEFAULT_MAX_REGEX_PATTERN_LENGTH,
            max_regex_input_length: DEFAULT_MAX_REGEX_INPUT_LENGTH,
            reject_unsafe_regex: true,
            throw_on_error: false,
        }
    }
}

impl QueryOptions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_nodes_visited(mut self, limit: usize) -> Self {
        self.max_nodes_visited = limit;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    #[must_use]
    pub fn with_max_regex_pattern_length(mut self, limit: usize) -> Self {
        self.max_regex_pattern_length = limit;
        self
    }

    #[must_use]
    pub fn with_max_regex_input_length(mut self, limit: usize) -> Self {
        self.max_regex_input_length = limit;
        self
    }

    #[must_use]
    pub fn with_reject_unsafe_regex(mut self, reject: bool) -> Self {
        self.reject_unsafe_regex = reject;
        self
    }

    #[must_use]
    pub fn with_throw_on_error(mut self, throw: bool) -> Self {
        self.throw_on_error = throw;
        self
    }

    /// Parse options from a JSON object; absent fields keep their defaults
    ///
    /// # Errors
    /// `ConfigurationError::InvalidParameter` for malformed JSON or unknown fields,
    /// `ConfigurationError::InvalidLimit` for a zero budget.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| ConfigurationError::InvalidParameter(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }
}
