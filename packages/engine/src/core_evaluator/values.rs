//! Intermediate values of the filter sub-language

use crate::ast::Literal;
use crate::document::{JsonNode, NodeKind};

use super::node::EvalNode;

/// Result of evaluating a comparison operand or value-typed function
#[derive(Debug, Clone)]
pub enum Operand<'q, N> {
    /// No value: empty or multi-node singular query, inapplicable function
    Nothing,
    /// Literal written in the query
    Literal(&'q Literal),
    /// Number computed by a function (`length`, `count`)
    Number(f64),
    /// Value found in the document
    Node(N),
}

/// Function result in one of the three function types
#[derive(Debug)]
pub enum TypedValue<'q, N> {
    Value(Operand<'q, N>),
    Logical(bool),
    Nodes(Vec<EvalNode<N>>),
}

/// Scalar view used by equality and ordering
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
}

impl<N: JsonNode> Operand<'_, N> {
    #[inline]
    #[must_use]
    pub fn is_nothing(&self) -> bool {
        matches!(self, Operand::Nothing)
    }

    /// Scalar view; `None` for `Nothing` and for arrays and objects
    #[must_use]
    pub fn scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Operand::Nothing => None,
            Operand::Number(n) => Some(Scalar::Number(*n)),
            Operand::Literal(literal) => Some(match literal {
                Literal::Null => Scalar::Null,
                Literal::Bool(b) => Scalar::Bool(*b),
                Literal::Number(n) => Scalar::Number(*n),
                Literal::String(s) => Scalar::String(s),
            }),
            Operand::Node(node) => node_scalar(node),
        }
    }

    /// String content of a string literal or string node
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.scalar()? {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Scalar view of a document value
pub fn node_scalar<N: JsonNode>(node: &N) -> Option<Scalar<'_>> {
    match node.kind() {
        NodeKind::Null => Some(Scalar::Null),
        NodeKind::Bool => node.as_bool().map(Scalar::Bool),
        NodeKind::Number => node.as_f64().map(Scalar::Number),
        NodeKind::String => node.as_str().map(Scalar::String),
        NodeKind::Array | NodeKind::Object => None,
    }
}
