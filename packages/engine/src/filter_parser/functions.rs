//! Function call parsing and argument validation

use super::core::FilterParser;
use crate::ast::{FunctionArg, FunctionCall};
use crate::error::{JsonPathResult, invalid_expression_error};
use crate::tokens::TokenKind;
use crate::type_system::{FunctionName, FunctionType};

impl FilterParser<'_, '_> {
    /// Parse `name(args...)`, checking arity and argument kinds against the signature
    pub(super) fn parse_function_call(&mut self) -> JsonPathResult<FunctionCall> {
        let name_token = self.stream.next_token();
        let TokenKind::Identifier(identifier) = &name_token.kind else {
            return Err(invalid_expression_error(
                self.stream.input(),
                "expected function name",
                name_token.start,
            ));
        };
        let Some(name) = FunctionName::from_identifier(identifier) else {
            return Err(invalid_expression_error(
                self.stream.input(),
                format!("unknown function '{identifier}'"),
                name_token.start,
            ));
        };

        self.stream.expect(&TokenKind::LeftParen, "after function name")?;
        self.stream.enter()?;

        let signature = name.signature();
        let mut args = Vec::with_capacity(signature.arity());

        if !self.stream.at(&TokenKind::RightParen) {
            loop {
                let Some(&expected) = signature.parameter_types.get(args.len()) else {
                    return Err(self.stream.error(format!(
                        "{name}() takes {} argument(s)",
                        signature.arity()
                    )));
                };
                args.push(self.parse_function_argument(name, expected)?);
                if !self.stream.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }

        if args.len() != signature.arity() {
            return Err(self.stream.error(format!(
                "{name}() takes {} argument(s), found {}",
                signature.arity(),
                args.len()
            )));
        }
        self.stream
            .expect(&TokenKind::RightParen, "to close function arguments")?;
        self.stream.exit();

        Ok(FunctionCall { name, args })
    }

    fn parse_function_argument(
        &mut self,
        function: FunctionName,
        expected: FunctionType,
    ) -> JsonPathResult<FunctionArg> {
        let start = self.stream.peek().start;

        match expected {
            FunctionType::ValueType => {
                if let Some(literal) = self.parse_literal() {
                    return Ok(FunctionArg::Literal(literal));
                }
                if self.at_query() {
                    let context = format!("as a value argument of {function}()");
                    return Ok(FunctionArg::SingularQuery(
                        self.parse_singular_query(&context)?,
                    ));
                }
                if self.at_function_call() {
                    let call = self.parse_function_call()?;
                    if call.name.signature().return_type == FunctionType::ValueType {
                        return Ok(FunctionArg::Function(call));
                    }
                    return Err(invalid_expression_error(
                        self.stream.input(),
                        format!("{}() cannot be used as a value argument of {function}()", call.name),
                        start,
                    ));
                }
                Err(self
                    .stream
                    .unexpected(&format!("expected value argument for {function}()")))
            }
            FunctionType::NodesType => {
                if self.at_query() {
                    return Ok(FunctionArg::Query(self.parse_filter_query()?));
                }
                Err(self
                    .stream
                    .unexpected(&format!("expected query argument for {function}()")))
            }
            FunctionType::LogicalType => Err(self.stream.error(format!(
                "{function}() has no logical parameters"
            ))),
        }
    }
}
