//! `value()`: the only value of a single-node nodelist

use crate::core_evaluator::{EvalNode, Operand};

/// The node's value when the nodelist has exactly one member, otherwise `Nothing`
pub fn single_value<'q, N>(nodes: Vec<EvalNode<N>>) -> Operand<'q, N> {
    let mut nodes = nodes.into_iter();
    match (nodes.next(), nodes.next()) {
        (Some(only), None) => Operand::Node(only.into_value()),
        _ => Operand::Nothing,
    }
}
