// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a settings file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (spacing sanity, etc.). Use [`load_or_default`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading settings file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML settings from {:?}", path))?;

    Ok(config)
}

/// Load settings from path if the file exists, falling back to defaults.
///
/// Settings are ambient: unlike course data, a missing file is normal and
/// yields `ConfigFile::default()`. The result is validated either way.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();

    let config = if path.exists() {
        load_from_path(path)?
    } else {
        debug!(path = ?path, "no settings file found, using defaults");
        ConfigFile::default()
    };

    validate_config(&config)?;
    Ok(config)
}

/// Helper to resolve a default settings path.
///
/// Currently this just returns `Skilltree.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Skilltree.toml")
}
