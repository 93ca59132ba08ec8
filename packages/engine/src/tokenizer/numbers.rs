//! Number literal tokenization
//!
//! Integers reject leading zeros. `-0` and anything with a fraction or exponent
//! becomes a `Number`, which index and slice positions refuse.

use super::core::Tokenizer;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::TokenKind;

impl Tokenizer<'_> {
    pub(super) fn lex_number(&mut self, start: usize) -> JsonPathResult<usize> {
        let mut i = start;
        let negative = self.chars[i] == '-';
        if negative {
            i += 1;
        }

        let digit_start = i;
        match self.char_at(i) {
            Some('0') => {
                i += 1;
                if self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                    return Err(invalid_expression_error(
                        self.input,
                        "integers cannot have leading zeros",
                        digit_start,
                    ));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                    i += 1;
                }
            }
            _ => {
                return Err(invalid_expression_error(
                    self.input,
                    "expected digit after '-'",
                    i,
                ));
            }
        }

        let mut is_float = false;
        if self.char_at(i) == Some('.') {
            i += 1;
            if !self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                return Err(invalid_expression_error(
                    self.input,
                    "fraction requires at least one digit",
                    i,
                ));
            }
            while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
            is_float = true;
        }

        if matches!(self.char_at(i), Some('e' | 'E')) {
            i += 1;
            if matches!(self.char_at(i), Some('+' | '-')) {
                i += 1;
            }
            if !self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                return Err(invalid_expression_error(
                    self.input,
                    "exponent requires at least one digit",
                    i,
                ));
            }
            while self.char_at(i).is_some_and(|c| c.is_ascii_digit()) {
                i += 1;
            }
            is_float = true;
        }

        let text: String = self.chars[start..i].iter().collect();
        let negative_zero = negative && i == digit_start + 1 && self.chars[digit_start] == '0';

        let kind = if is_float || negative_zero {
            TokenKind::Number(self.parse_float(&text, start)?)
        } else {
            match text.parse::<i64>() {
                Ok(value) => TokenKind::Integer(value),
                // Out of i64 range: still a valid literal, never a valid index
                Err(_) => TokenKind::Number(self.parse_float(&text, start)?),
            }
        };

        self.push(kind, start, i);
        Ok(i)
    }

    fn parse_float(&self, text: &str, start: usize) -> JsonPathResult<f64> {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(invalid_expression_error(
                self.input,
                "number literal out of range",
                start,
            )),
        }
    }
}
