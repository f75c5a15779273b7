//! Format registry and dispatch.
//!
//! ```
//! use vivitree_core::{Converter, ConvertError, TreeNode};
//!
//! let mut converter = Converter::new();
//! let mut tree = TreeNode::new();
//! converter.import(r#"{"name":"demo","opts":{"__data":true,"depth":3}}"#, &mut tree, "json").unwrap();
//! assert_eq!(
//!     converter.export(&tree, "json").unwrap(),
//!     r#"{"name":"demo","opts":{"__data":true,"depth":3}}"#
//! );
//!
//! let err = converter.export(&tree, "xml").unwrap_err();
//! assert_eq!(err, ConvertError::UnsupportedFormat("xml".into()));
//! assert_eq!(converter.last_error(), Some(&err));
//! ```

use crate::decoder::import_structure;
use crate::encoder::check_reserved;
use crate::error::{ConvertError, Result};
use crate::format::{Format, JsonFormat};
use crate::fsio;
use crate::node::TreeNode;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Converts trees to and from the registered formats.
///
/// Every call returns its outcome directly. The converter also remembers the
/// latest failure so call sites that ignore the return value can still ask
/// for it through [`last_error`](Self::last_error); a success clears it.
pub struct Converter {
    formats: HashMap<String, Box<dyn Format>>,
    last_error: Option<ConvertError>,
}

impl Converter {
    /// A converter with [`JsonFormat`] registered under `"json"`.
    pub fn new() -> Self {
        let mut converter = Self::empty();
        converter.register(JsonFormat::new());
        converter
    }

    /// A converter with no formats at all.
    pub fn empty() -> Self {
        Self {
            formats: HashMap::new(),
            last_error: None,
        }
    }

    /// Register `format` under its [`Format::id`], returning any format it
    /// replaced.
    pub fn register(&mut self, format: impl Format + 'static) -> Option<Box<dyn Format>> {
        let id = format.id().to_string();
        self.formats.insert(id, Box::new(format))
    }

    pub fn supports(&self, format: &str) -> bool {
        self.formats.contains_key(format)
    }

    /// Registered format identifiers, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.formats.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Encode `tree` in the given format. The tree is only read.
    pub fn export(&mut self, tree: &TreeNode, format: &str) -> Result<String> {
        let outcome = self.lookup(format).and_then(|codec| {
            check_reserved(tree)?;
            codec.encode(&tree.to_structure())
        });
        if let Ok(text) = &outcome {
            tracing::debug!(format, bytes = text.len(), "exported tree");
        }
        self.record(outcome)
    }

    /// Decode `payload` and merge it into `tree`.
    ///
    /// `tree` is untouched unless the payload decodes successfully.
    pub fn import(&mut self, payload: &str, tree: &mut TreeNode, format: &str) -> Result<()> {
        let outcome = self
            .lookup(format)
            .and_then(|codec| codec.decode(payload))
            .and_then(|structure| import_structure(&structure, tree));
        if outcome.is_ok() {
            tracing::debug!(format, bytes = payload.len(), "imported tree");
        }
        self.record(outcome)
    }

    /// Read `path` and import its content into `tree`.
    pub fn load_file(
        &mut self,
        path: impl AsRef<Path>,
        tree: &mut TreeNode,
        format: &str,
    ) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), format, "loading tree");
        match fsio::load(path) {
            Ok(content) => self.import(&content, tree, format),
            Err(e) => self.record(Err(e)),
        }
    }

    /// Export `tree` and write it to `path`. Nothing is written when the
    /// export fails.
    pub fn save_file(&mut self, tree: &TreeNode, path: impl AsRef<Path>, format: &str) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), format, "saving tree");
        let text = self.export(tree, format)?;
        let outcome = fsio::save(path, &text);
        self.record(outcome)
    }

    /// The most recent failure, or `None` if the last call succeeded.
    pub fn last_error(&self) -> Option<&ConvertError> {
        self.last_error.as_ref()
    }

    fn lookup(&self, format: &str) -> Result<&dyn Format> {
        self.formats
            .get(format)
            .map(|codec| codec.as_ref())
            .ok_or_else(|| ConvertError::UnsupportedFormat(format.to_string()))
    }

    fn record<T>(&mut self, outcome: Result<T>) -> Result<T> {
        self.last_error = outcome.as_ref().err().cloned();
        outcome
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("formats", &self.formats())
            .field("last_error", &self.last_error)
            .finish()
    }
}
