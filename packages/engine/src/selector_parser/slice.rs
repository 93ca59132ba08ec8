//! Index and slice parsing for array selectors

use super::core::SelectorParser;
use crate::ast::Selector;
use crate::error::JsonPathResult;
use crate::tokens::TokenKind;

/// Largest magnitude accepted for index and slice components (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

impl SelectorParser<'_, '_> {
    /// `index` or `start? : end? (: step?)?`
    pub(super) fn parse_index_or_slice(&mut self) -> JsonPathResult<Selector> {
        let start = self.parse_optional_integer()?;

        if !self.stream.eat(&TokenKind::Colon) {
            return match start {
                Some(index) => Ok(Selector::Index { index }),
                None => Err(self.stream.unexpected("expected index or slice")),
            };
        }

        let end = self.parse_optional_integer()?;
        let step = if self.stream.eat(&TokenKind::Colon) {
            self.parse_optional_integer()?
        } else {
            None
        };

        Ok(Selector::Slice { start, end, step })
    }

    fn parse_optional_integer(&mut self) -> JsonPathResult<Option<i64>> {
        match *self.stream.peek_kind() {
            TokenKind::Integer(value) => {
                if !(-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
                    return Err(self
                        .stream
                        .error(format!("integer {value} is outside the range ±(2^53-1)")));
                }
                self.stream.next_token();
                Ok(Some(value))
            }
            TokenKind::Number(_) => Err(self
                .stream
                .error("index and slice components must be integers")),
            _ => Ok(None),
        }
    }
}
