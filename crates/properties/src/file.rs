//! File-backed wrappers around the codec.
//!
//! Each helper performs exactly one read or one write. I/O errors are returned
//! as [`PropertiesError::Io`] with the original `io::Error` intact.

use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::PropertiesError;
use crate::{Properties, PROPERTIES_EXTENSION};

/// Reads `reader` to the end and decodes the contents.
pub fn read_from<R: Read>(mut reader: R) -> Result<Properties, PropertiesError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(decode(&buf)?)
}

/// Loads and decodes the properties file at `path`.
///
/// On a decode failure the partial map is available through
/// [`PropertiesError::Decode`].
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Properties, PropertiesError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read properties file");
    Ok(decode(&bytes)?)
}

/// Encodes `props` and writes the bytes to `writer`.
pub fn write_to<W: Write>(props: &Properties, mut writer: W) -> Result<(), PropertiesError> {
    let bytes = encode(props)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encodes `props` and writes them to `path`, replacing any existing file.
///
/// Nothing touches the disk if encoding fails. The file is truncated and
/// rewritten in place, so symlinks are followed and permissions are kept.
pub fn to_file<P: AsRef<Path>>(props: &Properties, path: P) -> Result<(), PropertiesError> {
    let path = path.as_ref();
    let bytes = encode(props)?;
    write_synced(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote properties file");
    Ok(())
}

/// Returns `true` if the file at `path` can be read and decodes cleanly.
pub fn valid_file<P: AsRef<Path>>(path: P) -> bool {
    from_file(path).is_ok()
}

/// Returns `true` if `path` ends in `.properties`.
pub fn has_properties_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e == &PROPERTIES_EXTENSION[1..])
        .unwrap_or(false)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    f.write_all(bytes)?;
    f.flush()?;
    f.sync_all()
}
