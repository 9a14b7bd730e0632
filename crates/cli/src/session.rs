use anyhow::{Context, Result};
use properties::{DecodeError, Properties, PropertiesError};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An open properties file: the in-memory map plus where it came from.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    props: Properties,
    dirty: bool,
}

impl Session {
    /// Loads `path`. A missing file yields an empty session when `create` is
    /// set. Malformed lines do not fail the open: the well-formed entries are
    /// kept and the decode error is returned alongside for reporting.
    pub fn open<P: AsRef<Path>>(path: P, create: bool) -> Result<(Self, Option<DecodeError>)> {
        let path = path.as_ref().to_path_buf();
        let (props, decode_err) = load(&path, create)?;
        Ok((
            Self {
                path,
                props,
                dirty: false,
            },
            decode_err,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// True when there are edits not yet written by [`Session::save`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Sets `key` to `value` after trimming both. Entries that could never be
    /// saved are refused here rather than at `SAVE` time.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entry = Properties::new();
        entry.insert(key.to_string(), value.to_string());
        properties::encode(&entry)?;

        self.props
            .insert(key.trim().to_string(), value.trim().to_string());
        self.dirty = true;
        Ok(())
    }

    /// Removes `key`, returning whether it was present.
    pub fn del(&mut self, key: &str) -> bool {
        let removed = self.props.remove(key).is_some();
        self.dirty |= removed;
        removed
    }

    /// All entries sorted by key.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut out: Vec<(&str, &str)> = self
            .props
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        out.sort_unstable();
        out
    }

    /// Checks the file currently on disk, not the in-memory map.
    pub fn validate_on_disk(&self) -> bool {
        properties::valid_file(&self.path)
    }

    /// Encodes the map and replaces the file on disk.
    pub fn save(&mut self) -> Result<()> {
        properties::to_file(&self.props, &self.path)
            .with_context(|| format!("failed to save {}", self.path.display()))?;
        self.dirty = false;
        info!(path = %self.path.display(), entries = self.props.len(), "saved");
        Ok(())
    }

    /// Discards in-memory edits and re-reads the file.
    pub fn reload(&mut self) -> Result<Option<DecodeError>> {
        let (props, decode_err) = load(&self.path, false)?;
        self.props = props;
        self.dirty = false;
        Ok(decode_err)
    }
}

fn load(path: &Path, create: bool) -> Result<(Properties, Option<DecodeError>)> {
    match properties::from_file(path) {
        Ok(props) => Ok((props, None)),
        Err(PropertiesError::Decode(e)) => {
            warn!(path = %path.display(), "{}", e);
            Ok((e.partial().clone(), Some(e)))
        }
        Err(PropertiesError::Io(e)) if create && e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "file not found, starting empty");
            Ok((Properties::new(), None))
        }
        Err(e) => Err(e).with_context(|| format!("failed to load {}", path.display())),
    }
}
