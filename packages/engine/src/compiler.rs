//! Query compiler and parse entry point
//!
//! Turns query text into an immutable [`Query`] AST. Every syntactic and static
//! restriction (singular comparison operands, function well-typedness, integer
//! ranges, nesting ceiling) is enforced before a `Query` is handed out.

use crate::ast::Query;
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::selector_parser::SelectorParser;
use crate::tokenizer::{TokenStream, is_blank, tokenize};
use crate::tokens::TokenKind;

/// Path-expression parser and compiler
pub struct JsonPathParser;

impl JsonPathParser {
    /// Compile a query string into its AST
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::InvalidExpression` carrying the character position of
    /// the first syntax error.
    ///
    /// # Examples
    ///
    /// ```
    /// use nodepath_engine::compiler::JsonPathParser;
    ///
    /// assert!(JsonPathParser::compile("$.store.book[0]").is_ok());
    /// assert!(JsonPathParser::compile("$[01]").is_err());
    /// ```
    pub fn compile(expression: &str) -> JsonPathResult<Query> {
        if expression.is_empty() {
            return Err(invalid_expression_error(
                expression,
                "empty expression not allowed",
                0,
            ));
        }

        if expression.starts_with(is_blank) {
            return Err(invalid_expression_error(
                expression,
                "leading whitespace is not allowed",
                0,
            ));
        }
        if expression.ends_with(is_blank) {
            return Err(invalid_expression_error(
                expression,
                "trailing whitespace is not allowed",
                expression.chars().count() - 1,
            ));
        }

        let tokens = tokenize(expression)?;
        let mut stream = TokenStream::new(expression, tokens);

        match stream.peek_kind() {
            TokenKind::Root => {}
            TokenKind::Current => {
                return Err(stream.error(
                    "current node identifier '@' is only valid within filter expressions [?...]",
                ));
            }
            _ => return Err(stream.unexpected("queries must start with '$'")),
        }

        let query = SelectorParser::new(&mut stream).parse_query()?;

        if !stream.at(&TokenKind::Eof) {
            return Err(stream.unexpected("expected segment or end of query"));
        }

        Ok(query)
    }

    /// Check syntax without keeping the AST
    ///
    /// # Errors
    ///
    /// Same as [`JsonPathParser::compile`].
    pub fn validate(expression: &str) -> JsonPathResult<()> {
        Self::compile(expression).map(|_| ()).inspect_err(|error| {
            tracing::trace!(target: "nodepath::parser", %error, "query rejected");
        })
    }
}
