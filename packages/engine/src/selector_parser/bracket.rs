//! Bracketed selector lists (`[sel, sel, ...]`)

use super::core::SelectorParser;
use crate::ast::Selector;
use crate::error::JsonPathResult;
use crate::filter_parser::FilterParser;
use crate::tokens::TokenKind;

impl SelectorParser<'_, '_> {
    /// Parse comma-separated selectors up to and including `]`
    pub(super) fn parse_bracketed_selection(&mut self) -> JsonPathResult<Vec<Selector>> {
        if self.stream.at(&TokenKind::RightBracket) {
            return Err(self.stream.error("empty bracketed selection"));
        }

        let mut selectors = vec![self.parse_bracket_selector()?];
        while self.stream.eat(&TokenKind::Comma) {
            selectors.push(self.parse_bracket_selector()?);
        }

        if !self.stream.eat(&TokenKind::RightBracket) {
            return Err(self
                .stream
                .unexpected("expected ',' or ']' in bracketed selection"));
        }
        Ok(selectors)
    }

    fn parse_bracket_selector(&mut self) -> JsonPathResult<Selector> {
        match self.stream.peek_kind() {
            TokenKind::String(name) => {
                let name = name.clone();
                self.stream.next_token();
                Ok(Selector::Name { name })
            }
            TokenKind::Star => {
                self.stream.next_token();
                Ok(Selector::Wildcard)
            }
            TokenKind::Question => {
                self.stream.next_token();
                self.stream.enter()?;
                let expression = FilterParser::new(&mut *self.stream).parse_logical_or()?;
                self.stream.exit();
                Ok(Selector::Filter { expression })
            }
            TokenKind::Integer(_) | TokenKind::Colon | TokenKind::Number(_) => {
                self.parse_index_or_slice()
            }
            TokenKind::Identifier(name) => {
                let reason = format!("member name '{name}' must be quoted inside brackets");
                Err(self.stream.error(reason))
            }
            _ => Err(self.stream.unexpected(
                "expected quoted name, '*', index, slice or filter in bracketed selection",
            )),
        }
    }
}
