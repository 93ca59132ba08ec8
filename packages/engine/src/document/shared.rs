//! Shared, interior-mutable document that may contain reference cycles

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use hashbrown::HashSet;
use serde_json::{Map, Number, Value};

use super::{JsonNode, NodeKind};
use crate::normalized_paths::PathElement;

/// Reference-counted document value
///
/// Containers can be linked into themselves, so a document built from
/// `SharedValue`s need not be a tree. Cloning copies the handle, not the value.
///
/// ```
/// use nodepath_engine::document::SharedValue;
///
/// let root = SharedValue::object();
/// root.insert("name", SharedValue::from("loop"));
/// root.insert("self", root.clone());
/// assert!(root.to_json().is_none());
/// ```
#[derive(Clone)]
pub struct SharedValue(Rc<SharedNode>);

enum SharedNode {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(RefCell<Vec<SharedValue>>),
    Object(RefCell<Vec<(String, SharedValue)>>),
}

impl SharedValue {
    fn new(node: SharedNode) -> Self {
        Self(Rc::new(node))
    }

    #[must_use]
    pub fn null() -> Self {
        Self::new(SharedNode::Null)
    }

    /// Empty array
    #[must_use]
    pub fn array() -> Self {
        Self::new(SharedNode::Array(RefCell::new(Vec::new())))
    }

    /// Empty object
    #[must_use]
    pub fn object() -> Self {
        Self::new(SharedNode::Object(RefCell::new(Vec::new())))
    }

    /// Append to an array; returns `false` when `self` is not an array
    pub fn push(&self, value: SharedValue) -> bool {
        match &*self.0 {
            SharedNode::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// Set an object member, replacing an existing one in place; returns `false`
    /// when `self` is not an object
    pub fn insert(&self, name: impl Into<String>, value: SharedValue) -> bool {
        let SharedNode::Object(members) = &*self.0 else {
            return false;
        };
        let name = name.into();
        let mut members = members.borrow_mut();
        match members.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => members.push((name, value)),
        }
        true
    }

    /// Whether both handles point at the same value, not merely equal ones
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &SharedValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Convert to an owned `serde_json::Value`; `None` if the value is cyclic
    #[must_use]
    pub fn to_json(&self) -> Option<Value> {
        let mut open = HashSet::new();
        let mut stack: Vec<JsonFrame> = Vec::new();
        let mut next = Some(self.clone());
        loop {
            let value = match next.take() {
                Some(node) => match node.begin_json(&mut open)? {
                    JsonStep::Leaf(value) => value,
                    JsonStep::Container(frame) => {
                        stack.push(frame);
                        continue;
                    }
                },
                None => {
                    let frame = stack.last_mut()?;
                    if let Some(child) = frame.next_child() {
                        next = Some(child);
                        continue;
                    }
                    let frame = stack.pop()?;
                    open.remove(&frame.id);
                    frame.finish()
                }
            };
            match stack.last_mut() {
                Some(parent) => parent.accept(value),
                None => return Some(value),
            }
        }
    }

    /// Scalars convert directly; containers open a frame unless already open
    fn begin_json(&self, open: &mut HashSet<usize>) -> Option<JsonStep> {
        let step = match &*self.0 {
            SharedNode::Null => JsonStep::Leaf(Value::Null),
            SharedNode::Bool(b) => JsonStep::Leaf(Value::Bool(*b)),
            SharedNode::Number(n) => JsonStep::Leaf(Value::Number(n.clone())),
            SharedNode::String(s) => JsonStep::Leaf(Value::String(s.clone())),
            SharedNode::Array(items) => {
                let id = self.address();
                if !open.insert(id) {
                    return None;
                }
                let items = items.borrow();
                JsonStep::Container(JsonFrame {
                    id,
                    children: items
                        .iter()
                        .map(|item| (None, item.clone()))
                        .collect::<Vec<_>>()
                        .into_iter(),
                    pending_name: None,
                    out: JsonOut::Array(Vec::with_capacity(items.len())),
                })
            }
            SharedNode::Object(members) => {
                let id = self.address();
                if !open.insert(id) {
                    return None;
                }
                let members = members.borrow();
                JsonStep::Container(JsonFrame {
                    id,
                    children: members
                        .iter()
                        .map(|(name, member)| (Some(name.clone()), member.clone()))
                        .collect::<Vec<_>>()
                        .into_iter(),
                    pending_name: None,
                    out: JsonOut::Object(Map::new()),
                })
            }
        };
        Some(step)
    }

    /// Scalar copy, or an empty container of the same kind
    fn shallow(value: &Value) -> Self {
        match value {
            Value::Null => Self::null(),
            Value::Bool(b) => Self::from(*b),
            Value::Number(n) => Self::new(SharedNode::Number(n.clone())),
            Value::String(s) => Self::from(s.as_str()),
            Value::Array(_) => Self::array(),
            Value::Object(_) => Self::object(),
        }
    }

    #[inline]
    fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }
}

impl From<bool> for SharedValue {
    fn from(value: bool) -> Self {
        Self::new(SharedNode::Bool(value))
    }
}

impl From<i64> for SharedValue {
    fn from(value: i64) -> Self {
        Self::new(SharedNode::Number(value.into()))
    }
}

impl From<f64> for SharedValue {
    /// Non-finite floats become `null`, as in `serde_json`
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(Self::null, |n| Self::new(SharedNode::Number(n)))
    }
}

impl From<&str> for SharedValue {
    fn from(value: &str) -> Self {
        Self::new(SharedNode::String(value.to_owned()))
    }
}

impl From<String> for SharedValue {
    fn from(value: String) -> Self {
        Self::new(SharedNode::String(value))
    }
}

impl From<&Value> for SharedValue {
    fn from(value: &Value) -> Self {
        let root = Self::shallow(value);
        let mut pending = vec![(value, root.clone())];
        while let Some((source, target)) = pending.pop() {
            match (source, &*target.0) {
                (Value::Array(items), SharedNode::Array(slot)) => {
                    let children = items
                        .iter()
                        .map(|item| {
                            let child = Self::shallow(item);
                            pending.push((item, child.clone()));
                            child
                        })
                        .collect();
                    *slot.borrow_mut() = children;
                }
                (Value::Object(members), SharedNode::Object(slot)) => {
                    let children = members
                        .iter()
                        .map(|(name, member)| {
                            let child = Self::shallow(member);
                            pending.push((member, child.clone()));
                            (name.clone(), child)
                        })
                        .collect();
                    *slot.borrow_mut() = children;
                }
                _ => {}
            }
        }
        root
    }
}

impl From<Value> for SharedValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl fmt::Debug for SharedValue {
    /// Compact JSON; a container reached again on its own path prints as `<cyclic>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedValue(")?;
        let mut open = HashSet::new();
        let mut stack = vec![DebugStep::Value(self.clone())];
        while let Some(step) = stack.pop() {
            match step {
                DebugStep::Text(text) => f.write_str(text)?,
                DebugStep::Key(name) => write_json_string(f, &name)?,
                DebugStep::Close { id, text } => {
                    open.remove(&id);
                    f.write_str(text)?;
                }
                DebugStep::Value(value) => match &*value.0 {
                    SharedNode::Null => f.write_str("null")?,
                    SharedNode::Bool(b) => write!(f, "{b}")?,
                    SharedNode::Number(n) => write!(f, "{n}")?,
                    SharedNode::String(s) => write_json_string(f, s)?,
                    SharedNode::Array(items) => {
                        let id = value.address();
                        if !open.insert(id) {
                            f.write_str("<cyclic>")?;
                            continue;
                        }
                        f.write_str("[")?;
                        stack.push(DebugStep::Close { id, text: "]" });
                        for (index, item) in items.borrow().iter().enumerate().rev() {
                            stack.push(DebugStep::Value(item.clone()));
                            if index > 0 {
                                stack.push(DebugStep::Text(","));
                            }
                        }
                    }
                    SharedNode::Object(members) => {
                        let id = value.address();
                        if !open.insert(id) {
                            f.write_str("<cyclic>")?;
                            continue;
                        }
                        f.write_str("{")?;
                        stack.push(DebugStep::Close { id, text: "}" });
                        for (index, (name, member)) in members.borrow().iter().enumerate().rev() {
                            stack.push(DebugStep::Value(member.clone()));
                            stack.push(DebugStep::Text(":"));
                            stack.push(DebugStep::Key(name.clone()));
                            if index > 0 {
                                stack.push(DebugStep::Text(","));
                            }
                        }
                    }
                },
            }
        }
        f.write_str(")")
    }
}

fn write_json_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quoted = serde_json::to_string(s).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

enum DebugStep {
    Value(SharedValue),
    Key(String),
    Text(&'static str),
    Close { id: usize, text: &'static str },
}

enum JsonStep {
    Leaf(Value),
    Container(JsonFrame),
}

/// Partially converted container in `to_json`
struct JsonFrame {
    id: usize,
    children: std::vec::IntoIter<(Option<String>, SharedValue)>,
    pending_name: Option<String>,
    out: JsonOut,
}

enum JsonOut {
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

impl JsonFrame {
    fn next_child(&mut self) -> Option<SharedValue> {
        let (name, child) = self.children.next()?;
        self.pending_name = name;
        Some(child)
    }

    fn accept(&mut self, value: Value) {
        match &mut self.out {
            JsonOut::Array(items) => items.push(value),
            JsonOut::Object(map) => {
                map.insert(self.pending_name.take().unwrap_or_default(), value);
            }
        }
    }

    fn finish(self) -> Value {
        match self.out {
            JsonOut::Array(items) => Value::Array(items),
            JsonOut::Object(map) => Value::Object(map),
        }
    }
}

impl Drop for SharedNode {
    /// Unlinks uniquely owned descendants one at a time so deep documents
    /// drop without deep recursion
    fn drop(&mut self) {
        let mut pending = take_children(self);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Rc::try_unwrap(child.0) {
                pending.extend(take_children(&mut node));
            }
        }
    }
}

fn take_children(node: &mut SharedNode) -> Vec<SharedValue> {
    match node {
        SharedNode::Array(items) => std::mem::take(items.get_mut()),
        SharedNode::Object(members) => std::mem::take(members.get_mut())
            .into_iter()
            .map(|(_, member)| member)
            .collect(),
        _ => Vec::new(),
    }
}

impl JsonNode for SharedValue {
    fn kind(&self) -> NodeKind {
        match &*self.0 {
            SharedNode::Null => NodeKind::Null,
            SharedNode::Bool(_) => NodeKind::Bool,
            SharedNode::Number(_) => NodeKind::Number,
            SharedNode::String(_) => NodeKind::String,
            SharedNode::Array(_) => NodeKind::Array,
            SharedNode::Object(_) => NodeKind::Object,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match &*self.0 {
            SharedNode::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match &*self.0 {
            SharedNode::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match &*self.0 {
            SharedNode::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn len(&self) -> usize {
        match &*self.0 {
            SharedNode::Array(items) => items.borrow().len(),
            SharedNode::Object(members) => members.borrow().len(),
            _ => 0,
        }
    }

    fn element(&self, index: usize) -> Option<Self> {
        match &*self.0 {
            SharedNode::Array(items) => items.borrow().get(index).cloned(),
            _ => None,
        }
    }

    fn member(&self, name: &str) -> Option<Self> {
        match &*self.0 {
            SharedNode::Object(members) => members
                .borrow()
                .iter()
                .find(|(existing, _)| existing == name)
                .map(|(_, member)| member.clone()),
            _ => None,
        }
    }

    fn children(&self) -> Vec<(PathElement, Self)> {
        match &*self.0 {
            SharedNode::Array(items) => items
                .borrow()
                .iter()
                .enumerate()
                .map(|(index, item)| (PathElement::Index(index), item.clone()))
                .collect(),
            SharedNode::Object(members) => members
                .borrow()
                .iter()
                .map(|(name, member)| (PathElement::Name(name.clone()), member.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn identity(&self) -> Option<usize> {
        self.kind().is_container().then(|| self.address())
    }
}
