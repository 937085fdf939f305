//! Error types for loading and querying the configuration store.
//!
//! Responsibilities:
//! - Define error variants for every failing store operation.
//! - Classify errors into the four coarse kinds callers match on (`ErrorKind`).
//!
//! Does NOT handle:
//! - Failures while mirroring entries into the environment. Those are logged
//!   and skipped (see `env.rs`), never returned.
//!
//! Invariants:
//! - Every variant carries enough context to locate the problem (path, key, value).
//! - Underlying I/O, JSON and number-parsing errors are preserved as `source`.

use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The config file could not be read.
    IoError,
    /// The config file is not valid JSON or does not match the expected shape.
    ParseError,
    /// No entry matches the requested key (case-sensitive).
    UndefinedKey,
    /// An entry was found but its value could not be converted to the requested type.
    ConversionError,
}

/// Errors that can occur while loading or querying a [`crate::ConfigStore`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Key is undefined (case-sensitive): {0}")]
    UndefinedKey(String),

    #[error("Invalid value {value:?} for key {key}: {source}")]
    Conversion {
        key: String,
        value: String,
        source: ConversionError,
    },
}

impl ConfigError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Io { .. } => ErrorKind::IoError,
            ConfigError::Parse { .. } => ErrorKind::ParseError,
            ConfigError::UndefinedKey(_) => ErrorKind::UndefinedKey,
            ConfigError::Conversion { .. } => ErrorKind::ConversionError,
        }
    }
}

/// Reasons a stored text value failed to convert to a typed value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("not a valid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("not a valid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("float value out of range")]
    FloatOutOfRange,
}
