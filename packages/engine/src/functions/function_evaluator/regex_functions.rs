//! `match()` and `search()` with the regex safety policy

use crate::core_evaluator::Operand;
use crate::core_evaluator::engine::EvaluationContext;
use crate::document::JsonNode;
use crate::error::{JsonPathResult, LimitKind, limit_exceeded_error};
use crate::functions::regex_cache::RegexUsage;
use crate::functions::regex_safety::unsafe_pattern_reason;

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Test `input` against `pattern`
    ///
    /// Non-string arguments and patterns that do not compile yield `false`.
    /// Oversized patterns or inputs and patterns rejected by the safety
    /// heuristics abort the evaluation.
    pub(crate) fn regex_test(
        &mut self,
        usage: RegexUsage,
        input: &Operand<'_, N>,
        pattern: &Operand<'_, N>,
    ) -> JsonPathResult<bool> {
        let Some(pattern) = pattern.as_str() else {
            return Ok(false);
        };

        let pattern_length = pattern.chars().count();
        if pattern_length > self.options.max_regex_pattern_length {
            tracing::debug!(target: "nodepath::regex", pattern_length, "regex pattern too long");
            return Err(limit_exceeded_error(
                LimitKind::RegexPatternLength,
                format!(
                    "pattern of {pattern_length} characters exceeds maximum of {}",
                    self.options.max_regex_pattern_length
                ),
            ));
        }

        if self.options.reject_unsafe_regex
            && let Some(reason) = unsafe_pattern_reason(pattern)
        {
            tracing::debug!(target: "nodepath::regex", pattern, reason, "regex rejected by safety policy");
            return Err(limit_exceeded_error(
                LimitKind::UnsafeRegex,
                format!("pattern '{pattern}' rejected: {reason}"),
            ));
        }

        let Some(input) = input.as_str() else {
            return Ok(false);
        };

        let input_length = input.chars().count();
        if input_length > self.options.max_regex_input_length {
            tracing::debug!(target: "nodepath::regex", input_length, "regex input too long");
            return Err(limit_exceeded_error(
                LimitKind::RegexInputLength,
                format!(
                    "input of {input_length} characters exceeds maximum of {}",
                    self.options.max_regex_input_length
                ),
            ));
        }

        Ok(self
            .regex_cache
            .get_or_compile(usage, pattern)
            .is_some_and(|regex| regex.is_match(input)))
    }
}
