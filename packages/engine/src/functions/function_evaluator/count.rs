//! `count()`: nodelist size

use crate::core_evaluator::{EvalNode, Operand};

#[allow(clippy::cast_precision_loss)]
pub fn count_nodes<'q, N>(nodes: &[EvalNode<N>]) -> Operand<'q, N> {
    Operand::Number(nodes.len() as f64)
}
