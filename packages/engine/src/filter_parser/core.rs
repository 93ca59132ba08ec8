//! Core filter parser structure and token helpers

use crate::ast::{ComparisonOp, Literal};
use crate::tokenizer::TokenStream;
use crate::tokens::TokenKind;

/// Parser for filter expressions following `?`
pub struct FilterParser<'s, 'a> {
    pub(super) stream: &'s mut TokenStream<'a>,
}

impl<'s, 'a> FilterParser<'s, 'a> {
    #[inline]
    pub fn new(stream: &'s mut TokenStream<'a>) -> Self {
        Self { stream }
    }

    /// Consume a comparison operator if one is next
    pub(super) fn parse_comparison_operator(&mut self) -> Option<ComparisonOp> {
        let op = match self.stream.peek_kind() {
            TokenKind::Equal => ComparisonOp::Equal,
            TokenKind::NotEqual => ComparisonOp::NotEqual,
            TokenKind::Less => ComparisonOp::Less,
            TokenKind::LessEq => ComparisonOp::LessEq,
            TokenKind::Greater => ComparisonOp::Greater,
            TokenKind::GreaterEq => ComparisonOp::GreaterEq,
            _ => return None,
        };
        self.stream.next_token();
        Some(op)
    }

    /// Consume a literal token if one is next
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn parse_literal(&mut self) -> Option<Literal> {
        let literal = match self.stream.peek_kind() {
            TokenKind::Null => Literal::Null,
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Integer(value) => Literal::Number(*value as f64),
            TokenKind::Number(value) => Literal::Number(*value),
            TokenKind::String(value) => Literal::String(value.clone()),
            _ => return None,
        };
        self.stream.next_token();
        Some(literal)
    }

    /// Function call: identifier immediately followed by `(`
    pub(super) fn at_function_call(&self) -> bool {
        let name = self.stream.peek();
        let paren = self.stream.peek_nth(1);
        matches!(name.kind, TokenKind::Identifier(_))
            && paren.kind == TokenKind::LeftParen
            && paren.start == name.end
    }
}
