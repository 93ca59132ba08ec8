//! Option validation

use super::QueryOptions;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for QueryOptions {
    fn validate(&self) -> ConfigResult<()> {
        let budgets = [
            ("maxNodesVisited", self.max_nodes_visited),
            ("maxDepth", self.max_depth),
            ("maxRegexPatternLength", self.max_regex_pattern_length),
            ("maxRegexInputLength", self.max_regex_input_length),
        ];
        for (name, value) in budgets {
            if value == 0 {
                return Err(ConfigurationError::InvalidLimit(format!(
                    "{name} cannot be zero"
                )));
            }
        }
        Ok(())
    }
}
