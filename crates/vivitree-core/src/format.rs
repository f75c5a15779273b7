//! Text formats the [`Converter`](crate::Converter) can dispatch to.
//!
//! A format only moves between text and the canonical [`Value`] structure;
//! turning that structure into a tree (and back) is shared by every format.

use crate::decoder::decode_json;
use crate::encoder::encode_json;
use crate::error::Result;
use crate::value::Value;

/// An encode/decode pair registered under an identifier such as `"json"`.
///
/// `encode` failures should be [`ConvertError::Encode`] and `decode` failures
/// [`ConvertError::Parse`].
///
/// [`ConvertError::Encode`]: crate::ConvertError::Encode
/// [`ConvertError::Parse`]: crate::ConvertError::Parse
pub trait Format: Send + Sync {
    /// Identifier the format is registered under.
    fn id(&self) -> &str;

    /// Render a canonical structure (always a `Value::Object`) as text.
    fn encode(&self, structure: &Value) -> Result<String>;

    /// Parse text back into a canonical structure.
    fn decode(&self, text: &str) -> Result<Value>;
}

/// JSON, compact by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat {
    pretty: bool,
}

impl JsonFormat {
    pub const ID: &'static str = "json";

    pub fn new() -> Self {
        Self::default()
    }

    /// Two-space indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Format for JsonFormat {
    fn id(&self) -> &str {
        Self::ID
    }

    fn encode(&self, structure: &Value) -> Result<String> {
        encode_json(structure, self.pretty)
    }

    fn decode(&self, text: &str) -> Result<Value> {
        decode_json(text)
    }
}
