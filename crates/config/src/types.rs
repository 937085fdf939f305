//! On-disk shape of the pairs file.
//!
//! Responsibilities:
//! - Define `ConfigEntry`, one key/value/flag record.
//! - Define the `PairsFile` wrapper and read it from disk.
//!
//! Does NOT handle:
//! - Replacing store state (see `store.rs`).
//! - Writing entries into the process environment (see `env.rs`).
//!
//! Invariants:
//! - The top-level `Pairs` field is required and matched case-sensitively.
//! - Missing `key` and `value` default to empty strings; missing `osEnv` defaults to `false`.
//! - Present fields must have the right JSON type.
//! - Unknown fields are ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One key/value record from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Lookup key. Not required to be unique.
    #[serde(default)]
    pub key: String,
    /// Raw text value; typed accessors convert on read.
    #[serde(default)]
    pub value: String,
    /// Whether `load` copies this entry into the process environment.
    #[serde(rename = "osEnv", default)]
    pub mirror_to_env: bool,
}

impl ConfigEntry {
    /// Creates an entry that is not mirrored into the environment.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            mirror_to_env: false,
        }
    }

    /// Marks this entry to be mirrored into the environment on load.
    pub fn mirrored(mut self) -> Self {
        self.mirror_to_env = true;
        self
    }
}

/// Top-level document of a pairs file.
#[derive(Debug, Deserialize)]
pub(crate) struct PairsFile {
    #[serde(rename = "Pairs")]
    pub pairs: Vec<ConfigEntry>,
}

/// Reads and parses a pairs file from disk.
pub(crate) fn read_pairs_file(path: &Path) -> Result<PairsFile, ConfigError> {
    let content = std::fs::read(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_slice::<PairsFile>(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
