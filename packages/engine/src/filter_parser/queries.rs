//! Embedded queries (`@...` / `$...`) inside filter expressions

use super::core::FilterParser;
use crate::ast::{Query, SingularQuery};
use crate::error::JsonPathResult;
use crate::selector_parser::SelectorParser;
use crate::tokens::TokenKind;

impl FilterParser<'_, '_> {
    #[inline]
    pub(super) fn at_query(&self) -> bool {
        matches!(self.stream.peek_kind(), TokenKind::Root | TokenKind::Current)
    }

    /// Parse an unrestricted query yielding a nodelist
    pub(super) fn parse_filter_query(&mut self) -> JsonPathResult<Query> {
        SelectorParser::new(&mut *self.stream).parse_query()
    }

    /// Parse a query that must be singular, for comparison operands and value arguments
    pub(super) fn parse_singular_query(&mut self, context: &str) -> JsonPathResult<SingularQuery> {
        let start = self.stream.peek().start;
        let query = self.parse_filter_query()?;
        query.to_singular().ok_or_else(|| {
            crate::error::invalid_expression_error(
                self.stream.input(),
                format!("non-singular query is not allowed {context}"),
                start,
            )
        })
    }
}
