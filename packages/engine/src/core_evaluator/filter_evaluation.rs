//! Logical expression and comparable evaluation

use crate::ast::{Comparable, LogicalExpr, RootIdentifier, SingularQuery, SingularSegment};
use crate::document::{JsonNode, NodeKind};
use crate::error::JsonPathResult;

use super::engine::EvaluationContext;
use super::node::EvalNode;
use super::selectors::normalize_index;
use super::values::{Operand, TypedValue};

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Evaluate a filter predicate with `current` bound to `@`
    ///
    /// # Errors
    /// Propagates limit and regex policy failures. Type mismatches are not
    /// errors; they make the predicate false.
    pub fn evaluate_logical(
        &mut self,
        expression: &LogicalExpr,
        current: &EvalNode<N>,
    ) -> JsonPathResult<bool> {
        match expression {
            LogicalExpr::Or { operands } => {
                for operand in operands {
                    if self.evaluate_logical(operand, current)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            LogicalExpr::And { operands } => {
                for operand in operands {
                    if !self.evaluate_logical(operand, current)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            LogicalExpr::Not { operand } => Ok(!self.evaluate_logical(operand, current)?),
            LogicalExpr::Comparison { left, op, right } => {
                let left = self.evaluate_comparable(left, current)?;
                let right = self.evaluate_comparable(right, current)?;
                self.compare(&left, *op, &right)
            }
            LogicalExpr::Test { query } => Ok(!self.evaluate_query(query, current)?.is_empty()),
            LogicalExpr::Function(call) => Ok(match self.evaluate_function(call, current)? {
                TypedValue::Logical(result) => result,
                TypedValue::Nodes(nodes) => !nodes.is_empty(),
                TypedValue::Value(_) => false,
            }),
        }
    }

    /// Evaluate one side of a comparison
    ///
    /// # Errors
    /// Propagates limit and regex policy failures.
    pub fn evaluate_comparable<'q>(
        &mut self,
        comparable: &'q Comparable,
        current: &EvalNode<N>,
    ) -> JsonPathResult<Operand<'q, N>> {
        match comparable {
            Comparable::Literal { value } => Ok(Operand::Literal(value)),
            Comparable::SingularQuery(query) => Ok(self
                .resolve_singular(query, current)?
                .map_or(Operand::Nothing, Operand::Node)),
            Comparable::Function(call) => Ok(match self.evaluate_function(call, current)? {
                TypedValue::Value(operand) => operand,
                TypedValue::Logical(_) | TypedValue::Nodes(_) => Operand::Nothing,
            }),
        }
    }

    /// Follow a name/index chain; `None` when any step is missing
    ///
    /// # Errors
    /// Fails when the visit budget is exhausted.
    pub fn resolve_singular(
        &mut self,
        query: &SingularQuery,
        current: &EvalNode<N>,
    ) -> JsonPathResult<Option<N>> {
        let mut value = match query.root {
            RootIdentifier::Root => self.root.value().clone(),
            RootIdentifier::Current => current.value().clone(),
        };

        for segment in &query.segments {
            self.limiter.visit()?;
            let next = match segment {
                SingularSegment::Name(name) if value.kind() == NodeKind::Object => {
                    value.member(name)
                }
                SingularSegment::Index(index) if value.kind() == NodeKind::Array => {
                    normalize_index(*index, value.len()).and_then(|position| value.element(position))
                }
                _ => None,
            };
            match next {
                Some(found) => value = found,
                None => return Ok(None),
            }
        }

        Ok(Some(value))
    }
}
