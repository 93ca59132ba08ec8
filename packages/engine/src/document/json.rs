//! `JsonNode` for borrowed `serde_json` values

use serde_json::Value;

use super::{JsonNode, NodeKind};
use crate::normalized_paths::PathElement;

impl<'v> JsonNode for &'v Value {
    #[inline]
    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Null,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(_) => NodeKind::Number,
            Value::String(_) => NodeKind::String,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
        }
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    #[inline]
    fn as_f64(&self) -> Option<f64> {
        Value::as_f64(self)
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(members) => members.len(),
            _ => 0,
        }
    }

    #[inline]
    fn element(&self, index: usize) -> Option<Self> {
        match *self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    #[inline]
    fn member(&self, name: &str) -> Option<Self> {
        match *self {
            Value::Object(members) => members.get(name),
            _ => None,
        }
    }

    fn children(&self) -> Vec<(PathElement, Self)> {
        match *self {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (PathElement::Index(index), item))
                .collect(),
            Value::Object(members) => members
                .iter()
                .map(|(name, member)| (PathElement::Name(name.clone()), member))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[inline]
    fn identity(&self) -> Option<usize> {
        match *self {
            Value::Array(_) | Value::Object(_) => Some(std::ptr::from_ref::<Value>(*self) as usize),
            _ => None,
        }
    }
}
