//! Comparison and logical operator tokenization

use super::core::Tokenizer;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::TokenKind;

impl Tokenizer<'_> {
    pub(super) fn lex_operator(&mut self, i: usize) -> JsonPathResult<usize> {
        let followed_by = |c: char| self.char_at(i + 1) == Some(c);

        let (kind, width) = match self.chars[i] {
            '=' if followed_by('=') => (TokenKind::Equal, 2),
            '=' => {
                return Err(invalid_expression_error(
                    self.input,
                    "single '=' not supported, use '==' for equality",
                    i,
                ));
            }
            '!' if followed_by('=') => (TokenKind::NotEqual, 2),
            '!' => (TokenKind::Not, 1),
            '<' if followed_by('=') => (TokenKind::LessEq, 2),
            '<' => (TokenKind::Less, 1),
            '>' if followed_by('=') => (TokenKind::GreaterEq, 2),
            '>' => (TokenKind::Greater, 1),
            '&' if followed_by('&') => (TokenKind::LogicalAnd, 2),
            '|' if followed_by('|') => (TokenKind::LogicalOr, 2),
            c => {
                return Err(invalid_expression_error(
                    self.input,
                    format!("single '{c}' not supported, use '{c}{c}'"),
                    i,
                ));
            }
        };

        self.push(kind, i, i + width);
        Ok(i + width)
    }
}
