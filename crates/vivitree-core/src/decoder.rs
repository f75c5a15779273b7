//! Decoder: JSON text → canonical structure → tree.
//!
//! Decoding is split in two so that any [`Format`](crate::Format) can reuse
//! the tree-building half:
//!
//! 1. [`decode_json`] parses text into a [`Value`] (member order preserved).
//! 2. [`import_structure`] walks that value and replays it onto a target node
//!    through the ordinary accessor protocol.
//!
//! # Walk rules
//!
//! - Members are visited in document order.
//! - A member whose value is an object becomes a branch: the child is fetched
//!   with [`TreeNode::access`], its `__data` member (if any, `null` included)
//!   becomes the child's value, then the walk recurses into it.
//! - Any other member becomes a leaf via [`TreeNode::access_with`]. Arrays are
//!   opaque and never turn into indexed children.
//! - A `__data` member is only ever consumed by the parent step above. At the
//!   top level there is no parent step, so a top-level `__data` is skipped and
//!   the target's own value is left alone.
//!
//! The walk merges: existing children and values that the payload does not
//! mention are kept, so a payload can be imported into a subtree.

use crate::error::{ConvertError, Result};
use crate::node::{TreeNode, DATA_KEY};
use crate::value::Value;

/// Parse JSON text into the canonical structure and merge it into `tree`,
/// bypassing the format registry.
pub fn import_json(text: &str, tree: &mut TreeNode) -> Result<()> {
    let structure = decode_json(text)?;
    import_structure(&structure, tree)
}

/// Parse JSON text into a [`Value`].
pub fn decode_json(text: &str) -> Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| ConvertError::Parse(e.to_string()))?;
    Ok(Value::from(json))
}

/// Merge a decoded structure into `tree`.
///
/// The top level must be an object; anything else is a
/// [`ConvertError::Parse`] and `tree` is not touched.
pub fn import_structure(structure: &Value, tree: &mut TreeNode) -> Result<()> {
    let Value::Object(members) = structure else {
        return Err(ConvertError::Parse(format!(
            "expected an object at the top level, found {}",
            structure.kind()
        )));
    };
    if members.iter().any(|(name, _)| name == DATA_KEY) {
        tracing::debug!("skipping top-level `{}` member", DATA_KEY);
    }
    import_members(members, tree);
    Ok(())
}

fn import_members(members: &[(String, Value)], node: &mut TreeNode) {
    for (name, value) in members {
        if name == DATA_KEY {
            continue;
        }
        match value {
            Value::Object(nested) => {
                let child = node.access(name);
                if let Some((_, data)) = nested.iter().find(|(key, _)| key == DATA_KEY) {
                    child.set_value(data.clone());
                }
                import_members(nested, child);
            }
            leaf => {
                node.access_with(name, leaf.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_json_reports_parse_errors() {
        let err = decode_json("{not json").unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn nested_data_object_is_opaque() {
        let mut tree = TreeNode::new();
        import_json(r#"{"a":{"__data":{"k":1},"b":2}}"#, &mut tree).unwrap();
        let a = tree.child("a").unwrap();
        assert_eq!(
            a.value(),
            Some(&Value::Object(vec![("k".into(), Value::Integer(1))]))
        );
        assert_eq!(a.children().collect::<Vec<_>>(), ["b"]);
    }
}
