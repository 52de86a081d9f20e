use std::path::PathBuf;
use thiserror::Error;

use crate::core::KeyParseError;

/// Errors that can occur while loading record settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file does not exist.
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),
    /// Path is not valid UTF-8 and cannot be expanded.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Line is not of the form `name = value`.
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },
    /// Option name is not a record setting.
    #[error("Unknown option '{name}' on line {line}")]
    UnknownOption { line: usize, name: String },
    /// Option was already set earlier in the file.
    #[error("Duplicate option '{name}' on line {line}")]
    DuplicateOption { line: usize, name: String },
    /// Option value has the wrong shape (e.g. `max_keys = many`).
    #[error("Invalid value '{value}' for '{option}' on line {line}")]
    InvalidValue {
        line: usize,
        option: String,
        value: String,
    },
    /// A key in a key list is not recognised.
    #[error("Invalid key on line {line}: {source}")]
    InvalidKey {
        line: usize,
        #[source]
        source: KeyParseError,
    },
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
