//! # Config - shell settings
//!
//! Settings for the `cli` shell. Every field has a default and can be set from
//! the environment:
//!
//! ```text
//! PROPS_PATH       properties file to edit        (default: "app.properties")
//! PROPS_LOG_LEVEL  DEBUG | INFO | WARN | ERROR    (default: "WARN")
//! PROPS_CREATE     start empty if file is absent  (default: "true")
//! PROPS_CONFIG     optional settings file, itself in properties format
//! ```
//!
//! Keys in the `PROPS_CONFIG` file are `path`, `log_level` and `create`.
//! Environment variables take precedence over that file.

use anyhow::{Context, Result};
use properties::Properties;
use std::path::PathBuf;
use tracing::debug;

pub const DEFAULT_PATH: &str = "app.properties";
pub const DEFAULT_LOG_LEVEL: &str = "WARN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// File the shell loads at startup and writes on `SAVE`.
    pub path: PathBuf,
    /// Maximum log level, upper-cased.
    pub log_level: String,
    /// Start with an empty map when `path` does not exist yet.
    pub create: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            create: true,
        }
    }
}

impl ShellConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// When `PROPS_CONFIG` names a file it is decoded and applied first, then
    /// the individual variables are layered on top.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(file) = lookup("PROPS_CONFIG") {
            let props = properties::from_file(&file)
                .with_context(|| format!("failed to load shell config from {}", file))?;
            cfg.overlay(&props);
        }

        if let Some(path) = lookup("PROPS_PATH") {
            cfg.path = PathBuf::from(path);
        }
        if let Some(level) = lookup("PROPS_LOG_LEVEL") {
            cfg.log_level = level.to_uppercase();
        }
        if let Some(create) = lookup("PROPS_CREATE") {
            cfg.create = parse_bool(&create).unwrap_or(cfg.create);
        }

        debug!(?cfg, "shell config resolved");
        Ok(cfg)
    }

    /// Applies `path`, `log_level` and `create` from a decoded settings file.
    pub fn overlay(&mut self, props: &Properties) {
        if let Some(path) = props.get("path") {
            self.path = PathBuf::from(path);
        }
        if let Some(level) = props.get("log_level") {
            self.log_level = level.to_uppercase();
        }
        if let Some(create) = props.get("create") {
            self.create = parse_bool(create).unwrap_or(self.create);
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    s.trim().to_lowercase().parse().ok()
}
