//! Record settings files.
//!
//! Hosts usually build `RecordSettings` in code, but the CLI (and any host
//! that wants user-editable recording rules) loads them from a small
//! `name = value` file:
//!
//! - **Partial files**: options that are not listed keep their defaults
//! - **Key lists**: comma-separated key names, aliases or raw codes
//! - **Line-numbered errors**: every parse failure names its line
//! - **Home expansion**: `~/...` paths are expanded before reading
//!
//! # Example
//!
//! ```no_run
//! use keybind_recorder::config::load_settings;
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("~/.config/keybind-recorder/record.conf"))?;
//! println!("Recording up to {} keys", settings.max_keys);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::RecordSettings;

mod error;
pub mod parser;

pub use error::ConfigError;
pub use parser::parse_settings;

/// Expands a leading `~` in `path`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidPath` if the path is not valid UTF-8.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Loads record settings from a file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file doesn't exist,
/// `ConfigError::Io` if it cannot be read, and a parse variant
/// (with line number) if its content is invalid.
pub fn load_settings(path: &Path) -> Result<RecordSettings, ConfigError> {
    let path = expand_path(path)?;

    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    if path.read_link().is_ok() {
        warn!("Settings file is a symlink: {}", path.display());
    }

    let content = fs::read_to_string(&path)?;
    let settings = parse_settings(&content)?;

    debug!("Loaded record settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests;
