//! # Document Loading
//!
//! Reads a JSON document from disk. Every failure is returned as a
//! [`DocumentError`] carrying the path; the caller decides how each one is
//! reported.
//!
//! Any RFC 8259 document is accepted. Numbers keep their exact text, so
//! values outside the `f64` range parse, and nesting depth is bounded only
//! by memory: serde_json's recursion limit is lifted and `serde_stacker`
//! grows the stack on demand.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Error while locating, reading, or parsing a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Nothing exists at the given path.
    #[error("file not found: {path}")]
    NotFound {
        /// Path as given by the caller.
        path: String,
    },

    /// The path exists but could not be opened or read.
    #[error("cannot read '{path}'")]
    Read {
        /// Path as given by the caller.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed JSON.
    #[error("invalid JSON in '{path}'")]
    MalformedJson {
        /// Path as given by the caller.
        path: String,
        /// Underlying parse error, with line and column.
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    /// Returns true for the missing-file case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DocumentError::NotFound { .. })
    }
}

/// Load and parse the JSON document at `path`.
///
/// The file handle lives only for the duration of the parse.
///
/// # Errors
///
/// - [`DocumentError::NotFound`] if nothing exists at `path`.
/// - [`DocumentError::Read`] if the file cannot be opened or read.
/// - [`DocumentError::MalformedJson`] if the content is not valid UTF-8 JSON.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let display = path.display().to_string();

    if !path.exists() {
        return Err(DocumentError::NotFound { path: display });
    }

    let file = File::open(path).map_err(|e| DocumentError::Read {
        path: display.clone(),
        source: e,
    })?;

    let mut de = serde_json::Deserializer::from_reader(BufReader::new(file));
    de.disable_recursion_limit();

    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))
        .and_then(|value| de.end().map(|()| value));

    value.map_err(|e| {
        if e.is_io() {
            DocumentError::Read {
                path: display,
                source: e.into(),
            }
        } else {
            DocumentError::MalformedJson {
                path: display,
                source: e,
            }
        }
    })
}
