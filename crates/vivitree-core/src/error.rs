//! Error types for tree import and export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a tree to or from a text format.
///
/// Every variant carries an owned diagnostic so the converter can keep a copy
/// of the most recent failure around for [`Converter::last_error`].
///
/// [`Converter::last_error`]: crate::Converter::last_error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The payload could not be decoded (import path).
    #[error("parse error: {0}")]
    Parse(String),

    /// The tree could not be encoded (export path), e.g. a non-finite float
    /// or a child named with the reserved `__data` key.
    #[error("encode error: {0}")]
    Encode(String),

    /// No format is registered under the requested identifier.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

/// Convenience alias used throughout vivitree-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
