//! String literal tokenization with escape sequence handling
//!
//! Handles single- and double-quoted literals, the escape set permitted for
//! each quote style, and UTF-16 surrogate pairs in `\uXXXX` escapes.

use super::core::Tokenizer;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::TokenKind;

impl Tokenizer<'_> {
    /// Parse a quoted literal starting at the opening quote
    pub(super) fn lex_string(&mut self, open: usize) -> JsonPathResult<usize> {
        let quote = self.chars[open];
        let mut i = open + 1;
        let mut value = String::new();

        loop {
            let Some(c) = self.char_at(i) else {
                return Err(invalid_expression_error(
                    self.input,
                    "unterminated string literal",
                    open,
                ));
            };

            match c {
                c if c == quote => break,
                '\\' => {
                    i = self.lex_escape(i + 1, quote, &mut value)?;
                    continue;
                }
                c if is_raw_control(c) => {
                    return Err(invalid_expression_error(
                        self.input,
                        format!(
                            "control character U+{:04X} must be escaped in string literal",
                            u32::from(c)
                        ),
                        i,
                    ));
                }
                c => value.push(c),
            }
            i += 1;
        }

        self.push(TokenKind::String(value), open, i + 1);
        Ok(i + 1)
    }

    /// Decode one escape; `i` points just past the backslash
    fn lex_escape(&self, i: usize, quote: char, value: &mut String) -> JsonPathResult<usize> {
        let decoded = match self.char_at(i) {
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('/') => '/',
            Some('\\') => '\\',
            Some(c @ ('\'' | '"')) if c == quote => c,
            Some('u') => return self.lex_unicode_escape(i + 1, value),
            Some(c) => {
                return Err(invalid_expression_error(
                    self.input,
                    format!("invalid escape sequence '\\{}'", c.escape_debug()),
                    i - 1,
                ));
            }
            None => {
                return Err(invalid_expression_error(
                    self.input,
                    "unterminated escape sequence",
                    i - 1,
                ));
            }
        };
        value.push(decoded);
        Ok(i + 1)
    }

    /// `\uXXXX`, combining a high surrogate with a following `\uXXXX` low surrogate
    fn lex_unicode_escape(&self, i: usize, value: &mut String) -> JsonPathResult<usize> {
        let high = self.hex4(i)?;

        let code_point = match high {
            0xD800..=0xDBFF => {
                let low_at = i + 4;
                if self.char_at(low_at) != Some('\\') || self.char_at(low_at + 1) != Some('u') {
                    return Err(invalid_expression_error(
                        self.input,
                        "high surrogate must be followed by a low surrogate escape",
                        low_at,
                    ));
                }
                let low = self.hex4(low_at + 2)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(invalid_expression_error(
                        self.input,
                        "invalid low surrogate in unicode escape",
                        low_at,
                    ));
                }
                let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                value.push(self.scalar(combined, i)?);
                return Ok(low_at + 6);
            }
            0xDC00..=0xDFFF => {
                return Err(invalid_expression_error(
                    self.input,
                    "unpaired low surrogate in unicode escape",
                    i,
                ));
            }
            cp => cp,
        };

        value.push(self.scalar(code_point, i)?);
        Ok(i + 4)
    }

    fn hex4(&self, i: usize) -> JsonPathResult<u32> {
        let mut code = 0u32;
        for offset in 0..4 {
            let digit = self
                .char_at(i + offset)
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| {
                    invalid_expression_error(
                        self.input,
                        "unicode escape requires four hex digits",
                        i + offset,
                    )
                })?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn scalar(&self, code_point: u32, position: usize) -> JsonPathResult<char> {
        char::from_u32(code_point).ok_or_else(|| {
            invalid_expression_error(self.input, "invalid unicode code point", position)
        })
    }
}

#[inline]
fn is_raw_control(c: char) -> bool {
    matches!(u32::from(c), 0x00..=0x1F | 0x7F)
}
