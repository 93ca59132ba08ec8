//! Nodelist members and their location trail

use std::rc::Rc;

use crate::normalized_paths::{NormalizedPath, PathElement};

type PathTrail = Option<Rc<PathLink>>;

/// Parent-linked path, shared between siblings
#[derive(Debug)]
struct PathLink {
    parent: PathTrail,
    element: PathElement,
}

/// One member of a nodelist: a document value plus its root-relative location
#[derive(Debug, Clone)]
pub struct EvalNode<N> {
    value: N,
    trail: PathTrail,
}

impl<N> EvalNode<N> {
    /// The document root
    #[inline]
    pub fn root(value: N) -> Self {
        Self { value, trail: None }
    }

    /// A child of this node reached through `element`
    #[inline]
    pub fn child(&self, element: PathElement, value: N) -> Self {
        Self {
            value,
            trail: Some(Rc::new(PathLink {
                parent: self.trail.clone(),
                element,
            })),
        }
    }

    #[inline]
    pub fn value(&self) -> &N {
        &self.value
    }

    #[inline]
    pub fn into_value(self) -> N {
        self.value
    }

    /// Render the location as a normalized path
    #[must_use]
    pub fn path(&self) -> NormalizedPath {
        let mut elements = Vec::new();
        let mut link = self.trail.as_deref();
        while let Some(current) = link {
            elements.push(current.element.clone());
            link = current.parent.as_deref();
        }
        elements.reverse();
        NormalizedPath::new(elements)
    }

    /// Split into the value and its rendered path
    #[must_use]
    pub fn into_parts(self) -> (N, NormalizedPath) {
        let path = self.path();
        (self.value, path)
    }
}
