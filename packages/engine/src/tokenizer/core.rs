//! Core tokenizer type and main scanning loop

use crate::error::JsonPathResult;
use crate::tokens::{Token, TokenKind};

/// Tokenize a query string
///
/// # Errors
/// Returns `JsonPathError::InvalidExpression` with the offending character offset
/// for unterminated or malformed strings, bad numbers and unknown characters.
pub fn tokenize(query: &str) -> JsonPathResult<Vec<Token>> {
    Tokenizer::new(query).tokenize()
}

/// Whitespace permitted between tokens: space, tab, line feed, carriage return
#[inline]
#[must_use]
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Character-indexed scanner over a query string
pub struct Tokenizer<'a> {
    pub(super) input: &'a str,
    pub(super) chars: Vec<char>,
    pub(super) tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    #[inline]
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().collect(),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input, terminating the sequence with `Eof`
    ///
    /// # Errors
    /// Returns the first lexical error encountered.
    pub fn tokenize(mut self) -> JsonPathResult<Vec<Token>> {
        let mut i = 0;

        while i < self.chars.len() {
            i = match self.chars[i] {
                c if is_blank(c) => i + 1,
                '\'' | '"' => self.lex_string(i)?,
                c if c.is_ascii_digit() || c == '-' => self.lex_number(i)?,
                '=' | '!' | '<' | '>' | '&' | '|' => self.lex_operator(i)?,
                '.' => self.lex_dot(i)?,
                _ => self.lex_character(i)?,
            };
        }

        let end = self.chars.len();
        self.push(TokenKind::Eof, end, end);
        Ok(self.tokens)
    }

    #[inline]
    pub(super) fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token::new(kind, start, end));
    }

    #[inline]
    pub(super) fn char_at(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }
}
