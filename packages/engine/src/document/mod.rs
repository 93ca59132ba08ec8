//! Document model seam
//!
//! The evaluator is generic over [`JsonNode`], a cheap clonable handle onto one
//! value of a JSON-shaped document. Results hand the caller's own handles back,
//! so no document data is copied by the engine.

mod json;
mod shared;

pub use shared::SharedValue;

use crate::normalized_paths::PathElement;

/// Structural kind of a document value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl NodeKind {
    #[inline]
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Array | NodeKind::Object)
    }
}

/// Read-only handle onto a document value
pub trait JsonNode: Clone {
    fn kind(&self) -> NodeKind;

    fn as_bool(&self) -> Option<bool>;

    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    /// Element count for arrays, member count for objects, zero otherwise
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array element at `index`
    fn element(&self, index: usize) -> Option<Self>;

    /// Object member by exact name
    fn member(&self, name: &str) -> Option<Self>;

    /// Children in document order: array elements by ascending index, object
    /// members in enumeration order
    fn children(&self) -> Vec<(PathElement, Self)>;

    /// Stable identity of a container for cycle detection; `None` for scalars
    fn identity(&self) -> Option<usize>;
}
