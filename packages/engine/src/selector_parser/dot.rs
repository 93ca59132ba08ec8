//! Dot and descendant shorthand parsing

use super::core::SelectorParser;
use crate::ast::{Segment, Selector};
use crate::error::JsonPathResult;
use crate::tokens::TokenKind;

impl SelectorParser<'_, '_> {
    /// `.name` or `.*`; the dot has already been consumed
    pub(super) fn parse_dot_segment(&mut self) -> JsonPathResult<Segment> {
        Ok(Segment::Child {
            selectors: vec![self.parse_shorthand_selector(".")?],
        })
    }

    /// `..name`, `..*` or `..[...]`; the double dot has already been consumed
    pub(super) fn parse_descendant_segment(&mut self) -> JsonPathResult<Segment> {
        let selectors = if self.stream.eat(&TokenKind::LeftBracket) {
            self.parse_bracketed_selection()?
        } else {
            vec![self.parse_shorthand_selector("..")?]
        };
        Ok(Segment::Descendant { selectors })
    }

    fn parse_shorthand_selector(&mut self, after: &str) -> JsonPathResult<Selector> {
        match self.stream.peek_kind() {
            TokenKind::Star => {
                self.stream.next_token();
                Ok(Selector::Wildcard)
            }
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.stream.next_token();
                Ok(Selector::Name { name })
            }
            _ => Err(self
                .stream
                .unexpected(&format!("expected member name or '*' after '{after}'"))),
        }
    }
}
