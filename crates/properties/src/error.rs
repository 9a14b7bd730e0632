use std::fmt;
use std::io;

use thiserror::Error;

use crate::Properties;

/// A non-empty line that did not split into exactly one key and one value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid property: {line}")]
pub struct MalformedLine {
    /// The offending line, already trimmed.
    pub line: String,
}

/// Every malformed line found while decoding, plus whatever parsed cleanly.
///
/// Displays as the per-line messages joined with `; `.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    lines: Vec<MalformedLine>,
    partial: Properties,
}

impl DecodeError {
    pub(crate) fn new(lines: Vec<MalformedLine>, partial: Properties) -> Self {
        Self { lines, partial }
    }

    /// The rejected lines, in input order.
    pub fn lines(&self) -> &[MalformedLine] {
        &self.lines
    }

    /// Entries decoded from the well-formed lines.
    pub fn partial(&self) -> &Properties {
        &self.partial
    }

    /// Consumes the error, returning the partially decoded map.
    pub fn into_partial(self) -> Properties {
        self.partial
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

/// Which half of an entry was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Key,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Key => f.write_str("key"),
            Field::Value => f.write_str("value"),
        }
    }
}

/// Errors raised while encoding a [`Properties`] map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A trimmed key or value contains `\n` or `=`.
    #[error("Invalid property {field} \"{content}\"")]
    ReservedCharacter { field: Field, content: String },
}

/// Errors from the file-backed helpers.
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// Read or write failure, passed through untouched.
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error("{0}")]
    Encode(#[from] EncodeError),
}
