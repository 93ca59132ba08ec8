//! Logical and comparison expression parsing

use super::core::FilterParser;
use crate::ast::{Comparable, ComparisonOp, LogicalExpr};
use crate::error::JsonPathResult;
use crate::tokens::TokenKind;
use crate::type_system::FunctionType;

impl FilterParser<'_, '_> {
    /// `and ('||' and)*`
    ///
    /// # Errors
    /// Returns `InvalidExpression` for any malformed or ill-typed sub-expression.
    pub fn parse_logical_or(&mut self) -> JsonPathResult<LogicalExpr> {
        let mut operands = vec![self.parse_logical_and()?];
        while self.stream.eat(&TokenKind::LogicalOr) {
            operands.push(self.parse_logical_and()?);
        }

        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            LogicalExpr::Or { operands }
        })
    }

    /// `basic ('&&' basic)*`
    fn parse_logical_and(&mut self) -> JsonPathResult<LogicalExpr> {
        let mut operands = vec![self.parse_basic_expression()?];
        while self.stream.eat(&TokenKind::LogicalAnd) {
            operands.push(self.parse_basic_expression()?);
        }

        Ok(if operands.len() == 1 {
            operands.remove(0)
        } else {
            LogicalExpr::And { operands }
        })
    }

    /// Negation, parenthesised group, comparison or test
    fn parse_basic_expression(&mut self) -> JsonPathResult<LogicalExpr> {
        match self.stream.peek_kind() {
            TokenKind::Not => {
                self.stream.next_token();
                self.stream.enter()?;
                let operand = if self.stream.at(&TokenKind::LeftParen) {
                    self.parse_paren_expression()?
                } else {
                    self.parse_test_expression()?
                };
                self.stream.exit();
                Ok(LogicalExpr::Not {
                    operand: Box::new(operand),
                })
            }
            TokenKind::LeftParen => self.parse_paren_expression(),
            _ => self.parse_comparison_or_test(),
        }
    }

    fn parse_paren_expression(&mut self) -> JsonPathResult<LogicalExpr> {
        self.stream.expect(&TokenKind::LeftParen, "to open group")?;
        self.stream.enter()?;
        let inner = self.parse_logical_or()?;
        self.stream.expect(&TokenKind::RightParen, "to close group")?;
        self.stream.exit();
        Ok(inner)
    }

    /// Query or logical/nodes-typed function used as a boolean
    fn parse_test_expression(&mut self) -> JsonPathResult<LogicalExpr> {
        if self.at_query() {
            return Ok(LogicalExpr::Test {
                query: self.parse_filter_query()?,
            });
        }
        if self.at_function_call() {
            let start = self.stream.peek().start;
            let call = self.parse_function_call()?;
            return self.function_as_test(call, start);
        }
        Err(self
            .stream
            .unexpected("expected query, function call or '(' in filter"))
    }

    fn parse_comparison_or_test(&mut self) -> JsonPathResult<LogicalExpr> {
        let start = self.stream.peek().start;

        let left = if let Some(value) = self.parse_literal() {
            Comparable::Literal { value }
        } else if self.at_query() {
            let query = self.parse_filter_query()?;
            if !self.stream.peek_kind().is_comparison_operator() {
                return Ok(LogicalExpr::Test { query });
            }
            let singular = query.to_singular().ok_or_else(|| {
                crate::error::invalid_expression_error(
                    self.stream.input(),
                    "non-singular query is not allowed in a comparison",
                    start,
                )
            })?;
            Comparable::SingularQuery(singular)
        } else if self.at_function_call() {
            let call = self.parse_function_call()?;
            if !self.stream.peek_kind().is_comparison_operator() {
                return self.function_as_test(call, start);
            }
            self.comparable_function(call, start)?
        } else {
            return Err(self
                .stream
                .unexpected("expected literal, query, function call or '(' in filter"));
        };

        let Some(op) = self.parse_comparison_operator() else {
            return Err(crate::error::invalid_expression_error(
                self.stream.input(),
                "literal must be part of a comparison",
                start,
            ));
        };
        let right = self.parse_comparable(op)?;

        Ok(LogicalExpr::Comparison { left, op, right })
    }

    /// Right-hand side of a comparison
    fn parse_comparable(&mut self, op: ComparisonOp) -> JsonPathResult<Comparable> {
        let start = self.stream.peek().start;

        if let Some(value) = self.parse_literal() {
            return Ok(Comparable::Literal { value });
        }
        if self.at_query() {
            return Ok(Comparable::SingularQuery(
                self.parse_singular_query("in a comparison")?,
            ));
        }
        if self.at_function_call() {
            let call = self.parse_function_call()?;
            return self.comparable_function(call, start);
        }
        Err(self
            .stream
            .unexpected(&format!("expected comparable after {op:?} operator")))
    }

    fn comparable_function(
        &self,
        call: crate::ast::FunctionCall,
        start: usize,
    ) -> JsonPathResult<Comparable> {
        if call.name.signature().return_type == FunctionType::ValueType {
            Ok(Comparable::Function(call))
        } else {
            Err(crate::error::invalid_expression_error(
                self.stream.input(),
                format!("{}() does not return a comparable value", call.name),
                start,
            ))
        }
    }

    fn function_as_test(
        &self,
        call: crate::ast::FunctionCall,
        start: usize,
    ) -> JsonPathResult<LogicalExpr> {
        match call.name.signature().return_type {
            FunctionType::LogicalType | FunctionType::NodesType => Ok(LogicalExpr::Function(call)),
            FunctionType::ValueType => Err(crate::error::invalid_expression_error(
                self.stream.input(),
                format!("{}() result must be compared, it cannot be used as a test", call.name),
                start,
            )),
        }
    }
}
