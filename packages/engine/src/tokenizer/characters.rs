//! Punctuation, shorthand member names and keywords

use super::core::{Tokenizer, is_blank};
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::TokenKind;

/// First character of a member-name shorthand
#[inline]
pub(super) fn is_name_first(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || u32::from(c) >= 0x80
}

#[inline]
pub(super) fn is_name_char(c: char) -> bool {
    is_name_first(c) || c.is_ascii_digit()
}

impl Tokenizer<'_> {
    /// Single-character punctuation, identifiers and keywords
    pub(super) fn lex_character(&mut self, i: usize) -> JsonPathResult<usize> {
        let kind = match self.chars[i] {
            '$' => TokenKind::Root,
            '@' => TokenKind::Current,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '?' => TokenKind::Question,
            '*' => TokenKind::Star,
            c if is_name_first(c) => return Ok(self.lex_identifier(i, true)),
            c => {
                return Err(invalid_expression_error(
                    self.input,
                    format!("unexpected character '{}'", c.escape_debug()),
                    i,
                ));
            }
        };
        self.push(kind, i, i + 1);
        Ok(i + 1)
    }

    /// `.` or `..` followed immediately by a shorthand selector
    ///
    /// Whitespace is legal around bracket punctuation but never directly after a
    /// shorthand dot, so the selector is scanned here rather than by the main loop.
    pub(super) fn lex_dot(&mut self, i: usize) -> JsonPathResult<usize> {
        let descendant = self.char_at(i + 1) == Some('.');
        let next = if descendant { i + 2 } else { i + 1 };
        let kind = if descendant {
            TokenKind::DoubleDot
        } else {
            TokenKind::Dot
        };
        self.push(kind, i, next);

        match self.char_at(next) {
            Some('*') => {
                self.push(TokenKind::Star, next, next + 1);
                Ok(next + 1)
            }
            Some('[') if descendant => {
                self.push(TokenKind::LeftBracket, next, next + 1);
                Ok(next + 1)
            }
            Some(c) if is_name_first(c) => Ok(self.lex_identifier(next, false)),
            Some(c) if is_blank(c) => Err(invalid_expression_error(
                self.input,
                "whitespace is not permitted after a shorthand dot",
                next,
            )),
            Some(c) => Err(invalid_expression_error(
                self.input,
                format!(
                    "expected member name or '*' after '{}', found '{}'",
                    if descendant { ".." } else { "." },
                    c.escape_debug()
                ),
                next,
            )),
            None => Err(invalid_expression_error(
                self.input,
                "expected member name or '*' at end of input",
                next,
            )),
        }
    }

    /// Identifier run; keywords are only recognised outside shorthand position
    fn lex_identifier(&mut self, start: usize, keywords: bool) -> usize {
        let mut i = start;
        while self.char_at(i).is_some_and(is_name_char) {
            i += 1;
        }
        let identifier: String = self.chars[start..i].iter().collect();

        let kind = match identifier.as_str() {
            "true" if keywords => TokenKind::True,
            "false" if keywords => TokenKind::False,
            "null" if keywords => TokenKind::Null,
            _ => TokenKind::Identifier(identifier),
        };
        self.push(kind, start, i);
        i
    }
}
