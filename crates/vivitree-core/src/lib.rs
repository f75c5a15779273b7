//! # vivitree-core
//!
//! Auto-vivifying hierarchical key-value trees, plus a converter that moves
//! them to and from JSON.
//!
//! Nodes are created by addressing them: asking a [`TreeNode`] for a child
//! that does not exist creates it. A node can hold a value, children, or
//! both. In JSON a branch with its own value carries that value under the
//! reserved `__data` member.
//!
//! ## Quick start
//!
//! ```rust
//! use vivitree_core::{export_json, import_json, TreeNode};
//!
//! let mut tree = TreeNode::new();
//! tree.access_with("server", "main")
//!     .access_with("port", 8080);
//! tree.access("server").access_with("tls", true);
//!
//! let json = export_json(&tree).unwrap();
//! assert_eq!(json, r#"{"server":{"__data":"main","port":8080,"tls":true}}"#);
//!
//! let mut back = TreeNode::new();
//! import_json(&json, &mut back).unwrap();
//! assert_eq!(back, tree);
//! ```
//!
//! ## Modules
//!
//! - [`node`] — `TreeNode`, the create-on-access protocol
//! - [`value`] — leaf values and the canonical structure
//! - [`encoder`] — tree → JSON text
//! - [`decoder`] — JSON text → tree
//! - [`format`] — the `Format` trait and `JsonFormat`
//! - [`converter`] — format registry, dispatch, file helpers
//! - [`fsio`] — whole-file text I/O
//! - [`hooks`] — priority-ordered named callbacks
//! - [`error`] — error types

pub mod converter;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod format;
pub mod fsio;
pub mod hooks;
pub mod node;
pub mod value;

pub use converter::Converter;
pub use decoder::import_json;
pub use encoder::{export_json, MAX_DEPTH};
pub use error::{ConvertError, Result};
pub use format::{Format, JsonFormat};
pub use hooks::{Hooks, DEFAULT_PRIORITY};
pub use node::{Lookup, TreeNode, DATA_KEY};
pub use value::Value;
