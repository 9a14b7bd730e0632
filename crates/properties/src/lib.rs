//! # Properties - `key = value` files
//!
//! Reads and writes the line-oriented properties format used for application
//! configuration. Parsed data lives in a plain [`Properties`] map of strings.
//!
//! ## File Format
//!
//! ```text
//! key1 = value1
//! key2 = value2
//! ```
//!
//! One entry per line. Whitespace around keys, values and whole lines is
//! trimmed on read and normalized to `key = value` on write. Neither keys nor
//! values may contain `\n` or `=`.
//!
//! ## Decode vs. Encode
//!
//! Decoding is tolerant: a malformed line is reported but every other line is
//! still parsed, and the partial map is handed back inside [`DecodeError`].
//! Encoding is strict: the first key or value holding a reserved character
//! aborts the whole call and nothing is produced.
//!
//! ## Example
//!
//! ```rust,no_run
//! use properties::{decode, encode, Properties};
//!
//! let mut props = Properties::new();
//! props.insert("host".to_string(), "localhost".to_string());
//! let bytes = encode(&props).unwrap();
//! assert_eq!(bytes, b"host = localhost");
//!
//! let back = decode(&bytes).unwrap();
//! assert_eq!(back, props);
//!
//! properties::to_file(&back, "app.properties").unwrap();
//! ```

mod codec;
mod error;
mod file;

use std::collections::HashMap;

pub use codec::{decode, decode_lossy, encode, validate};
pub use error::{DecodeError, EncodeError, Field, MalformedLine, PropertiesError};
pub use file::{from_file, has_properties_extension, read_from, to_file, valid_file, write_to};

/// Conventional file extension for properties files.
pub const PROPERTIES_EXTENSION: &str = ".properties";

/// A decoded properties file: unique string keys mapped to string values.
///
/// Iteration order carries no meaning.
pub type Properties = HashMap<String, String>;

#[cfg(test)]
mod tests;
