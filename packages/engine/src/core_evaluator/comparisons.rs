//! Comparison operators and structural equality
//!
//! Equality walks both operands with an explicit work stack and remembers
//! container pairs already compared, so deep or cyclic operands neither overflow
//! the call stack nor loop.

use std::cmp::Ordering;

use hashbrown::HashSet;

use crate::ast::ComparisonOp;
use crate::document::{JsonNode, NodeKind};
use crate::error::JsonPathResult;
use crate::normalized_paths::PathElement;

use super::engine::EvaluationContext;
use super::values::{Operand, Scalar, node_scalar};

impl<N: JsonNode> EvaluationContext<'_, N> {
    /// Apply a comparison operator; any `Nothing` side makes it false
    ///
    /// # Errors
    /// Fails when structural equality exhausts the visit or depth budget.
    pub fn compare(
        &mut self,
        left: &Operand<'_, N>,
        op: ComparisonOp,
        right: &Operand<'_, N>,
    ) -> JsonPathResult<bool> {
        if left.is_nothing() || right.is_nothing() {
            return Ok(false);
        }

        match op {
            ComparisonOp::Equal => self.operands_equal(left, right),
            ComparisonOp::NotEqual => Ok(!self.operands_equal(left, right)?),
            ComparisonOp::Less => Ok(order(left, right) == Some(Ordering::Less)),
            ComparisonOp::LessEq => Ok(matches!(
                order(left, right),
                Some(Ordering::Less | Ordering::Equal)
            )),
            ComparisonOp::Greater => Ok(order(left, right) == Some(Ordering::Greater)),
            ComparisonOp::GreaterEq => Ok(matches!(
                order(left, right),
                Some(Ordering::Greater | Ordering::Equal)
            )),
        }
    }

    fn operands_equal(&mut self, left: &Operand<'_, N>, right: &Operand<'_, N>) -> JsonPathResult<bool> {
        if let (Operand::Node(left), Operand::Node(right)) = (left, right) {
            return self.nodes_equal(left, right);
        }
        Ok(match (left.scalar(), right.scalar()) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        })
    }

    /// Deep structural equality between two document values
    ///
    /// # Errors
    /// Each compared pair counts as a node visit; nesting counts against `max_depth`.
    pub fn nodes_equal(&mut self, left: &N, right: &N) -> JsonPathResult<bool> {
        let mut compared: HashSet<(usize, usize)> = HashSet::new();
        let mut stack = vec![(left.clone(), right.clone(), 0usize)];

        while let Some((left, right, depth)) = stack.pop() {
            self.limiter.visit()?;
            self.limiter.check_depth(depth)?;

            let kind = left.kind();
            if kind != right.kind() {
                return Ok(false);
            }
            if !kind.is_container() {
                if node_scalar(&left) != node_scalar(&right) {
                    return Ok(false);
                }
                continue;
            }

            if let (Some(l), Some(r)) = (left.identity(), right.identity())
                && !compared.insert((l, r))
            {
                continue;
            }
            if left.len() != right.len() {
                return Ok(false);
            }

            if kind == NodeKind::Array {
                for ((_, l), (_, r)) in left.children().into_iter().zip(right.children()) {
                    stack.push((l, r, depth + 1));
                }
            } else {
                for (element, l) in left.children() {
                    let PathElement::Name(name) = element else {
                        return Ok(false);
                    };
                    let Some(r) = right.member(&name) else {
                        return Ok(false);
                    };
                    stack.push((l, r, depth + 1));
                }
            }
        }

        Ok(true)
    }
}

/// Ordering between two numbers or two strings; `None` for any other pairing
fn order<N: JsonNode>(left: &Operand<'_, N>, right: &Operand<'_, N>) -> Option<Ordering> {
    match (left.scalar()?, right.scalar()?) {
        (Scalar::Number(l), Scalar::Number(r)) => l.partial_cmp(&r),
        (Scalar::String(l), Scalar::String(r)) => Some(l.cmp(r)),
        _ => None,
    }
}
