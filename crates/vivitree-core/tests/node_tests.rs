/// Accessor protocol tests for `TreeNode`.
///
/// Addressing is total: every `access` either returns an existing child or
/// creates one, so these tests pin exactly which calls create nodes and which
/// do not.
use vivitree_core::{Lookup, TreeNode, Value};

fn names(node: &TreeNode) -> Vec<&str> {
    node.children().collect()
}

// ============================================================================
// Auto-vivification
// ============================================================================

#[test]
fn chained_access_creates_exactly_the_path() {
    let mut tree = TreeNode::new();
    tree.access("a").access("b").access_with("c", 7);

    assert_eq!(names(&tree), ["a"]);
    let a = tree.child("a").unwrap();
    assert_eq!(names(a), ["b"]);
    let b = a.child("b").unwrap();
    assert_eq!(names(b), ["c"]);
    let c = b.child("c").unwrap();
    assert!(!c.has_children());

    assert_eq!(a.value(), None);
    assert_eq!(b.value(), None);
    assert_eq!(c.value(), Some(&Value::Integer(7)));
}

#[test]
fn access_for_reading_also_creates() {
    let mut tree = TreeNode::new();
    let typo = tree.access("colour");
    assert!(typo.is_empty());
    assert!(tree.exists("colour"));
}

#[test]
fn access_returns_existing_child() {
    let mut tree = TreeNode::new();
    tree.access_with("a", 1).access_with("b", 2);
    let a = tree.access("a");
    assert_eq!(a.value(), Some(&Value::Integer(1)));
    assert_eq!(names(a), ["b"]);
    assert_eq!(tree.len(), 1);
}

#[test]
fn access_with_overwrites_value_and_keeps_children() {
    let mut tree = TreeNode::new();
    tree.access_with("a", "old").access_with("b", true);
    tree.access_with("a", "new");

    let a = tree.child("a").unwrap();
    assert_eq!(a.value(), Some(&Value::String("new".into())));
    assert_eq!(names(a), ["b"]);
}

#[test]
fn access_with_returns_the_written_child() {
    let mut tree = TreeNode::new();
    let child = tree.access_with("a", 1);
    child.access_with("b", 2);
    assert_eq!(
        tree.get_path(["a", "b"]).and_then(TreeNode::value),
        Some(&Value::Integer(2))
    );
}

#[test]
fn children_keep_insertion_order() {
    let mut tree = TreeNode::new();
    for name in ["zeta", "alpha", "mid"] {
        tree.access(name);
    }
    tree.access("alpha");
    assert_eq!(names(&tree), ["zeta", "alpha", "mid"]);
}

// ============================================================================
// Non-creating reads
// ============================================================================

#[test]
fn read_value_missing_does_not_create() {
    let tree = TreeNode::new();
    assert_eq!(tree.read_value("missing"), Lookup::Missing);
    assert!(tree.read_value("missing").is_missing());
    assert!(names(&tree).is_empty());
}

#[test]
fn read_value_distinguishes_absent_from_missing() {
    let mut tree = TreeNode::new();
    tree.access("empty");
    tree.access_with("null", Value::Null);

    assert_eq!(tree.read_value("empty"), Lookup::Found(None));
    assert_eq!(tree.read_value("null"), Lookup::Found(Some(&Value::Null)));
    assert_eq!(tree.read_value("empty").value(), None);
    assert_eq!(tree.read_value("nope").value(), None);
}

#[test]
fn exists_does_not_create() {
    let tree = TreeNode::new();
    assert!(!tree.exists("x"));
    assert!(tree.is_empty());
}

#[test]
fn node_value_is_distinct_from_child_value() {
    let mut tree = TreeNode::new();
    tree.set_value("root");
    tree.access_with("value", "child");
    assert_eq!(tree.value(), Some(&Value::String("root".into())));
    assert_eq!(
        tree.read_value("value").value(),
        Some(&Value::String("child".into()))
    );
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn remove_drops_whole_subtree() {
    let mut tree = TreeNode::new();
    tree.access("a").access("b").access_with("c", 1);
    tree.access_with("d", 2);

    let removed = tree.remove("a").unwrap();
    assert!(removed.get_path(["b", "c"]).is_some());
    assert_eq!(names(&tree), ["d"]);
    assert!(!tree.exists("a"));
}

#[test]
fn remove_missing_is_noop() {
    let mut tree = TreeNode::new();
    tree.access("a");
    assert!(tree.remove("b").is_none());
    assert_eq!(names(&tree), ["a"]);
}

#[test]
fn remove_keeps_sibling_order() {
    let mut tree = TreeNode::new();
    for name in ["a", "b", "c", "d"] {
        tree.access(name);
    }
    tree.remove("b");
    assert_eq!(names(&tree), ["a", "c", "d"]);
}

#[test]
fn readdressing_removed_name_creates_fresh_node() {
    let mut tree = TreeNode::new();
    tree.access_with("a", 1).access("b");
    tree.remove("a");
    assert!(tree.access("a").is_empty());
}

// ============================================================================
// Values
// ============================================================================

#[test]
fn take_value_clears_value() {
    let mut node = TreeNode::new();
    node.set_value(3.5);
    assert_eq!(node.take_value(), Some(Value::Float(3.5)));
    assert_eq!(node.value(), None);
}

#[test]
fn arrays_are_opaque_leaf_values() {
    let mut tree = TreeNode::new();
    tree.access_with("list", vec![Value::from(1), Value::from("two")]);
    let list = tree.child("list").unwrap();
    assert!(!list.has_children());
    assert_eq!(
        list.value(),
        Some(&Value::Array(vec![
            Value::Integer(1),
            Value::String("two".into())
        ]))
    );
}

#[test]
fn child_mut_edits_in_place() {
    let mut tree = TreeNode::new();
    tree.access("a");
    tree.child_mut("a").unwrap().set_value(false);
    assert!(tree.child_mut("b").is_none());
    assert_eq!(tree.read_value("a").value(), Some(&Value::Bool(false)));
}
