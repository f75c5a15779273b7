//! Whole-file text I/O used by [`Converter::load_file`] and
//! [`Converter::save_file`], plus stdin/stdout fallbacks for command-line
//! front ends.
//!
//! [`Converter::load_file`]: crate::Converter::load_file
//! [`Converter::save_file`]: crate::Converter::save_file

use crate::error::{ConvertError, Result};
use std::io::{self, Read, Write};
use std::path::Path;

/// Read a UTF-8 file into a string.
pub fn load(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| io_error(path, e))
}

/// Write `text` to `path`, replacing any existing content.
pub fn save(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|e| io_error(path, e))
}

/// [`load`] from `path`, or read all of stdin when `path` is `None`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => load(path),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| io_error(Path::new("<stdin>"), e))?;
            Ok(buf)
        }
    }
}

/// [`save`] to `path`, or print `text` plus a newline when `path` is `None`.
pub fn write_sink(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => save(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")
                .and_then(|()| stdout.flush())
                .map_err(|e| io_error(Path::new("<stdout>"), e))
        }
    }
}

fn io_error(path: &Path, err: std::io::Error) -> ConvertError {
    ConvertError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
