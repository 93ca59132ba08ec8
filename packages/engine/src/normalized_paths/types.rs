//! Core normalized path types

/// One step from a node to its child
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathElement {
    /// Object member name, unescaped
    Name(String),
    /// Array index
    Index(usize),
}

impl From<&str> for PathElement {
    fn from(name: &str) -> Self {
        PathElement::Name(name.to_owned())
    }
}

impl From<String> for PathElement {
    fn from(name: String) -> Self {
        PathElement::Name(name)
    }
}

impl From<usize> for PathElement {
    fn from(index: usize) -> Self {
        PathElement::Index(index)
    }
}

/// Root-relative location of a single node
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    pub(super) elements: Vec<PathElement>,
}

impl NormalizedPath {
    /// The root path (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    /// Elements after the root, outermost first
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathElement] {
        &self.elements
    }

    #[inline]
    #[must_use]
    pub fn into_segments(self) -> Vec<PathElement> {
        self.elements
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.elements.len()
    }
}

impl FromIterator<PathElement> for NormalizedPath {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
