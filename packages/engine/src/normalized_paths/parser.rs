//! Normalized path string parsing
//!
//! Reads back exactly the form `format_path` produces: `$` followed by
//! `['name']` and `[index]` elements.

use std::iter::Peekable;
use std::str::CharIndices;

use super::types::{NormalizedPath, PathElement};
use crate::error::{JsonPathError, JsonPathResult, invalid_expression_error};

impl NormalizedPath {
    /// Parse a canonical normalized path string
    ///
    /// # Errors
    /// Returns `InvalidExpression` for anything `format_path` would not produce.
    pub fn parse(path: &str) -> JsonPathResult<Self> {
        PathReader::new(path).read()
    }
}

impl std::str::FromStr for NormalizedPath {
    type Err = JsonPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct PathReader<'a> {
    path: &'a str,
    chars: Peekable<CharIndices<'a>>,
    position: usize,
}

impl<'a> PathReader<'a> {
    fn new(path: &'a str) -> Self {
        Self {
            path,
            chars: path.char_indices().peekable(),
            position: 0,
        }
    }

    fn next(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.position += 1;
        Some(c)
    }

    fn error(&self, reason: impl Into<String>) -> JsonPathError {
        invalid_expression_error(self.path, reason, self.position)
    }

    fn expect(&mut self, expected: char) -> JsonPathResult<()> {
        match self.next() {
            Some(c) if c == expected => Ok(()),
            _ => Err(self.error(format!("expected '{expected}'"))),
        }
    }

    fn read(mut self) -> JsonPathResult<NormalizedPath> {
        self.expect('$')?;

        let mut elements = Vec::new();
        while self.chars.peek().is_some() {
            self.expect('[')?;
            let element = match self.chars.peek().map(|&(_, c)| c) {
                Some('\'') => PathElement::Name(self.read_name()?),
                Some(c) if c.is_ascii_digit() => PathElement::Index(self.read_index()?),
                _ => return Err(self.error("expected quoted name or index")),
            };
            self.expect(']')?;
            elements.push(element);
        }

        Ok(NormalizedPath { elements })
    }

    fn read_index(&mut self) -> JsonPathResult<usize> {
        let start = self.position;
        let mut digits = String::new();
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.next();
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(invalid_expression_error(
                self.path,
                "indices cannot have leading zeros",
                start,
            ));
        }
        digits
            .parse()
            .map_err(|_| invalid_expression_error(self.path, "index out of range", start))
    }

    fn read_name(&mut self) -> JsonPathResult<String> {
        self.expect('\'')?;
        let mut name = String::new();

        loop {
            match self.next() {
                Some('\'') => return Ok(name),
                Some('\\') => {
                    let decoded = match self.next() {
                        Some('\\') => '\\',
                        Some('\'') => '\'',
                        Some('b') => '\u{0008}',
                        Some('t') => '\t',
                        Some('n') => '\n',
                        Some('f') => '\u{000C}',
                        Some('r') => '\r',
                        Some('u') => self.read_control_escape()?,
                        _ => return Err(self.error("invalid escape sequence")),
                    };
                    name.push(decoded);
                }
                Some(c) if u32::from(c) < 0x20 => {
                    return Err(self.error("control characters must be escaped"));
                }
                Some(c) => name.push(c),
                None => return Err(self.error("unterminated member name")),
            }
        }
    }

    /// `\u00XX` as emitted for control characters without a short escape
    fn read_control_escape(&mut self) -> JsonPathResult<char> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("unicode escape requires four hex digits"))?;
            code = code * 16 + digit;
        }
        if code >= 0x20 {
            return Err(self.error("unicode escapes are only used for control characters"));
        }
        char::from_u32(code).ok_or_else(|| self.error("invalid code point"))
    }
}
