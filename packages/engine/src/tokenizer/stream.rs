//! Cursor over a token sequence shared by the selector and filter parsers

use std::collections::VecDeque;

use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::{Token, TokenKind};

/// Ceiling on nested parentheses, negations, filters and function calls
pub const MAX_NESTING_DEPTH: usize = 64;

/// Token queue with a permanent trailing `Eof`
pub struct TokenStream<'a> {
    input: &'a str,
    tokens: VecDeque<Token>,
    eof: Token,
    nesting: usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub fn new(input: &'a str, tokens: Vec<Token>) -> Self {
        let end = input.chars().count();
        let mut tokens: VecDeque<Token> = tokens.into();
        if tokens.back().is_some_and(|t| t.kind == TokenKind::Eof) {
            tokens.pop_back();
        }
        Self {
            input,
            tokens,
            eof: Token::new(TokenKind::Eof, end, end),
            nesting: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    #[inline]
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens.front().unwrap_or(&self.eof)
    }

    #[inline]
    #[must_use]
    pub fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    /// Look `n` tokens past the front
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(n).unwrap_or(&self.eof)
    }

    /// Consume the front token; at end of input keeps returning `Eof`
    pub fn next_token(&mut self) -> Token {
        self.tokens.pop_front().unwrap_or_else(|| self.eof.clone())
    }

    #[inline]
    #[must_use]
    pub fn at(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consume the front token if it matches
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.at(kind) {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail
    ///
    /// # Errors
    /// Returns `InvalidExpression` naming what was found instead.
    pub fn expect(&mut self, kind: &TokenKind, context: &str) -> JsonPathResult<Token> {
        if self.at(kind) {
            Ok(self.next_token())
        } else {
            Err(self.unexpected(&format!("expected {} {context}", kind.describe())))
        }
    }

    /// Error positioned at the current token
    #[must_use]
    pub fn error(&self, reason: impl Into<String>) -> crate::error::JsonPathError {
        invalid_expression_error(self.input, reason, self.peek().start)
    }

    /// Error that also names the token actually found
    #[must_use]
    pub fn unexpected(&self, expected: &str) -> crate::error::JsonPathError {
        self.error(format!("{expected}, found {}", self.peek_kind().describe()))
    }

    /// Enter one nesting level
    ///
    /// # Errors
    /// Fails once nesting passes `MAX_NESTING_DEPTH`.
    pub fn enter(&mut self) -> JsonPathResult<()> {
        self.nesting += 1;
        if self.nesting > MAX_NESTING_DEPTH {
            return Err(self.error(format!(
                "expression nesting exceeds maximum depth of {MAX_NESTING_DEPTH}"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn exit(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }
}
