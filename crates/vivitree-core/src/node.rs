//! Auto-vivifying tree nodes.
//!
//! A [`TreeNode`] owns an optional leaf value and an ordered list of named
//! children. Addressing a child that does not exist creates it, whether the
//! caller meant to read or to write:
//!
//! ```
//! use vivitree_core::{TreeNode, Value};
//!
//! let mut tree = TreeNode::new();
//! tree.access("db").access_with("host", "localhost");
//! tree.access("db").access_with("port", 5432);
//!
//! assert_eq!(tree.access("db").children().collect::<Vec<_>>(), ["host", "port"]);
//! assert_eq!(
//!     tree.access("db").read_value("port").value(),
//!     Some(&Value::Integer(5432))
//! );
//! ```
//!
//! A typo therefore produces a new empty branch instead of an error. The only
//! non-creating paths are [`TreeNode::read_value`], [`TreeNode::exists`],
//! [`TreeNode::child`] and [`TreeNode::get_path`].

use crate::value::Value;

/// Structural marker carrying a branch node's own value in the encoded form.
/// Not a legal child name for export.
pub const DATA_KEY: &str = "__data";

/// A node in an auto-vivifying tree.
///
/// Children are stored as `Vec<(String, TreeNode)>` so insertion order is the
/// export order. Lookups are linear, which is fine for configuration-sized
/// fan-out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeNode {
    value: Option<Value>,
    children: Vec<(String, TreeNode)>,
}

/// Result of a non-creating read through [`TreeNode::read_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// No child with that name exists.
    Missing,
    /// The child exists; its value may still be absent.
    Found(Option<&'a Value>),
}

impl<'a> Lookup<'a> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }

    /// The child's value, flattening "missing" and "absent" together.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Lookup::Missing => None,
            Lookup::Found(value) => *value,
        }
    }
}

impl TreeNode {
    /// An empty node: no value, no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the child called `name`, creating an empty one first if needed.
    pub fn access(&mut self, name: &str) -> &mut TreeNode {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.children.push((name.to_string(), TreeNode::new()));
                self.children.len() - 1
            }
        };
        &mut self.children[idx].1
    }

    /// Like [`access`](Self::access), then set the child's value. The child's
    /// own children are left alone.
    pub fn access_with(&mut self, name: &str, value: impl Into<Value>) -> &mut TreeNode {
        let child = self.access(name);
        child.value = Some(value.into());
        child
    }

    /// Value of the child called `name` without creating it.
    pub fn read_value(&self, name: &str) -> Lookup<'_> {
        match self.child(name) {
            Some(child) => Lookup::Found(child.value.as_ref()),
            None => Lookup::Missing,
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Detach and return the subtree under `name`. No-op when absent.
    pub fn remove(&mut self, name: &str) -> Option<TreeNode> {
        let idx = self.position(name)?;
        Some(self.children.remove(idx).1)
    }

    /// Child names in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &str> + '_ {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    /// Children with their names, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreeNode)> + '_ {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.position(name).map(|idx| &self.children[idx].1)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut TreeNode> {
        let idx = self.position(name)?;
        Some(&mut self.children[idx].1)
    }

    /// This node's own value, as opposed to a named child's.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    pub fn take_value(&mut self) -> Option<Value> {
        self.value.take()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the node has neither a value nor children.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Walk `path` from this node, creating every missing step.
    ///
    /// An empty path returns `self`.
    pub fn access_path<I, S>(&mut self, path: I) -> &mut TreeNode
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter()
            .fold(self, |node, step| node.access(step.as_ref()))
    }

    /// Walk `path` from this node without creating anything.
    pub fn get_path<I, S>(&self, path: I) -> Option<&TreeNode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        path.into_iter()
            .try_fold(self, |node, step| node.child(step.as_ref()))
    }

    /// Build the canonical structure of this node's children.
    ///
    /// A child with children becomes an object, prefixed with a `__data`
    /// member when the child has a value. A childless child becomes its bare
    /// value, `Null` when absent, except that an object value is wrapped as
    /// `{"__data": {...}}` so it is not read back as children. This node's
    /// own value is not part of the result.
    ///
    /// A child literally named `__data` shadows the injected marker here;
    /// export rejects such trees before calling this.
    pub fn to_structure(&self) -> Value {
        let mut members: Vec<(String, Value)> = Vec::with_capacity(self.children.len());
        for (name, child) in &self.children {
            let encoded = if child.has_children() {
                let mut object = Vec::with_capacity(child.children.len() + 1);
                if let Some(value) = &child.value {
                    object.push((DATA_KEY.to_string(), value.clone()));
                }
                if let Value::Object(nested) = child.to_structure() {
                    for (key, value) in nested {
                        upsert(&mut object, key, value);
                    }
                }
                Value::Object(object)
            } else {
                match &child.value {
                    Some(object @ Value::Object(_)) => {
                        Value::Object(vec![(DATA_KEY.to_string(), object.clone())])
                    }
                    Some(value) => value.clone(),
                    None => Value::Null,
                }
            };
            members.push((name.clone(), encoded));
        }
        Value::Object(members)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|(n, _)| n == name)
    }
}

/// Insert or overwrite in place, keeping the first occurrence's position.
fn upsert(members: &mut Vec<(String, Value)>, key: String, value: Value) {
    match members.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => members.push((key, value)),
    }
}
