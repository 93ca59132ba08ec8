//! Core selector parser structure and query/segment loop

use crate::ast::{Query, RootIdentifier, Segment};
use crate::error::JsonPathResult;
use crate::tokenizer::TokenStream;
use crate::tokens::TokenKind;

/// Parser for queries, segments and selectors
pub struct SelectorParser<'s, 'a> {
    pub(super) stream: &'s mut TokenStream<'a>,
}

impl<'s, 'a> SelectorParser<'s, 'a> {
    #[inline]
    pub fn new(stream: &'s mut TokenStream<'a>) -> Self {
        Self { stream }
    }

    /// Parse `$` or `@` followed by its segments
    ///
    /// # Errors
    /// Returns `InvalidExpression` if no identifier is present or a segment is malformed.
    pub fn parse_query(&mut self) -> JsonPathResult<Query> {
        let root = match self.stream.peek_kind() {
            TokenKind::Root => RootIdentifier::Root,
            TokenKind::Current => RootIdentifier::Current,
            _ => return Err(self.stream.unexpected("expected '$' or '@'")),
        };
        self.stream.next_token();

        Ok(Query {
            root,
            segments: self.parse_segments()?,
        })
    }

    /// Parse segments until the next token cannot start one
    ///
    /// # Errors
    /// Returns the first segment syntax error.
    pub fn parse_segments(&mut self) -> JsonPathResult<Vec<Segment>> {
        let mut segments = Vec::new();

        loop {
            let segment = match self.stream.peek_kind() {
                TokenKind::Dot => {
                    self.stream.next_token();
                    self.parse_dot_segment()?
                }
                TokenKind::DoubleDot => {
                    self.stream.next_token();
                    self.parse_descendant_segment()?
                }
                TokenKind::LeftBracket => {
                    self.stream.next_token();
                    Segment::Child {
                        selectors: self.parse_bracketed_selection()?,
                    }
                }
                _ => break,
            };
            segments.push(segment);
        }

        Ok(segments)
    }
}
