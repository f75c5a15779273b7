//! Encoder: tree → canonical structure → JSON text.
//!
//! The canonical structure comes from [`TreeNode::to_structure`]; this module
//! turns it into `serde_json::Value` and then text. Three things can fail:
//!
//! - **Reserved names**: a child literally called `__data` would be read back
//!   as its parent's own value, so the tree is rejected up front.
//! - **Non-finite floats**: JSON has no spelling for NaN or infinity.
//! - **Nesting deeper than [`MAX_DEPTH`]**: the decoder refuses such
//!   documents, so the encoder refuses to write them.
//!
//! All three yield [`ConvertError::Encode`] with the offending dotted path.
//!
//! # Example
//! ```
//! use vivitree_core::{export_json, TreeNode};
//!
//! let mut tree = TreeNode::new();
//! tree.access_with("node", 5).access_with("x", 1);
//! assert_eq!(export_json(&tree).unwrap(), r#"{"node":{"__data":5,"x":1}}"#);
//! ```

use crate::error::{ConvertError, Result};
use crate::node::{TreeNode, DATA_KEY};
use crate::value::Value;
use serde_json::{Map, Number};

/// Deepest array/object nesting the JSON decoder accepts. The top-level
/// object counts as depth 1, so a chain of `MAX_DEPTH` names ending in a
/// scalar is the deepest tree that round-trips.
pub const MAX_DEPTH: usize = 127;

/// Encode a tree to compact JSON, bypassing the format registry.
pub fn export_json(tree: &TreeNode) -> Result<String> {
    check_reserved(tree)?;
    encode_json(&tree.to_structure(), false)
}

/// Reject trees that contain a child named `__data` anywhere.
pub fn check_reserved(tree: &TreeNode) -> Result<()> {
    let mut path = Vec::new();
    find_reserved(tree, &mut path).map_or(Ok(()), |at| {
        Err(ConvertError::Encode(format!(
            "child name `{DATA_KEY}` is reserved (at `{at}`)"
        )))
    })
}

fn find_reserved<'a>(node: &'a TreeNode, path: &mut Vec<&'a str>) -> Option<String> {
    for (name, child) in node.iter() {
        path.push(name);
        if name == DATA_KEY {
            return Some(path.join("."));
        }
        if let Some(found) = find_reserved(child, path) {
            return Some(found);
        }
        path.pop();
    }
    None
}

/// Serialize a canonical structure as JSON text.
pub fn encode_json(structure: &Value, pretty: bool) -> Result<String> {
    let json = to_json(structure, &mut Vec::new())?;
    let text = if pretty {
        serde_json::to_string_pretty(&json)
    } else {
        serde_json::to_string(&json)
    };
    text.map_err(|e| ConvertError::Encode(e.to_string()))
}

/// Convert to `serde_json::Value`, tracking the member path for diagnostics.
/// Array elements appear in the path as their index.
fn to_json(value: &Value, path: &mut Vec<String>) -> Result<serde_json::Value> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Float(f) => match Number::from_f64(*f) {
            Some(n) => serde_json::Value::Number(n),
            None => {
                return Err(ConvertError::Encode(format!(
                    "non-finite number {f} at `{}` cannot be represented in JSON",
                    display_path(path)
                )))
            }
        },
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => {
            check_depth(path)?;
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                path.push(i.to_string());
                out.push(to_json(item, path)?);
                path.pop();
            }
            serde_json::Value::Array(out)
        }
        Value::Object(members) => {
            check_depth(path)?;
            let mut map = Map::new();
            for (key, member) in members {
                path.push(key.clone());
                map.insert(key.clone(), to_json(member, path)?);
                path.pop();
            }
            serde_json::Value::Object(map)
        }
    })
}

/// `path` holds one entry per enclosing container, so a container found at
/// `path` sits at depth `path.len() + 1`.
fn check_depth(path: &[String]) -> Result<()> {
    if path.len() >= MAX_DEPTH {
        return Err(ConvertError::Encode(format!(
            "nesting deeper than {MAX_DEPTH} levels at `{}`",
            display_path(path)
        )));
    }
    Ok(())
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}
