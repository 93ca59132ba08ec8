//! Query results paired with their locations

use nodepath_engine::{EvalNode, NormalizedPath};

/// A selected value and the normalized path it was found at
#[derive(Debug, Clone, PartialEq)]
pub struct NodeWithPath<N> {
    pub value: N,
    pub path: NormalizedPath,
}

impl<N> NodeWithPath<N> {
    /// Canonical path string, e.g. `$['store']['book'][0]`
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path.to_string()
    }
}

impl<N> From<EvalNode<N>> for NodeWithPath<N> {
    fn from(node: EvalNode<N>) -> Self {
        let (value, path) = node.into_parts();
        Self { value, path }
    }
}
