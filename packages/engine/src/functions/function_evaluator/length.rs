//! `length()`: string, array or object size

use crate::core_evaluator::Operand;
use crate::core_evaluator::values::Scalar;
use crate::document::{JsonNode, NodeKind};

/// UTF-16 code units of a string, elements of an array or members of an
/// object; `Nothing` for anything else
#[allow(clippy::cast_precision_loss)]
pub fn length_of<'q, N: JsonNode>(argument: &Operand<'q, N>) -> Operand<'q, N> {
    if let Operand::Node(node) = argument
        && matches!(node.kind(), NodeKind::Array | NodeKind::Object)
    {
        return Operand::Number(node.len() as f64);
    }
    match argument.scalar() {
        Some(Scalar::String(s)) => Operand::Number(s.encode_utf16().count() as f64),
        _ => Operand::Nothing,
    }
}
