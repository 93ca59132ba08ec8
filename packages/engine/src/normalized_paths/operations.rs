//! Path construction and relationships

use super::types::{NormalizedPath, PathElement};

impl NormalizedPath {
    /// Path of a child of this node
    #[must_use]
    pub fn child(&self, element: impl Into<PathElement>) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element.into());
        Self { elements }
    }

    /// Path with the last element removed; `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.elements.split_last()?;
        Some(Self {
            elements: parent.to_vec(),
        })
    }

    /// Strictly below `ancestor`
    #[inline]
    #[must_use]
    pub fn is_descendant_of(&self, ancestor: &NormalizedPath) -> bool {
        self.elements.len() > ancestor.elements.len()
            && self.elements.starts_with(&ancestor.elements)
    }

    #[inline]
    #[must_use]
    pub fn is_ancestor_of(&self, descendant: &NormalizedPath) -> bool {
        descendant.is_descendant_of(self)
    }
}
