//! In-memory configuration store.
//!
//! Responsibilities:
//! - Load an ordered list of pairs from a JSON file, replacing prior state wholesale.
//! - Mirror flagged pairs into the process environment after a successful load.
//! - Answer existence checks and typed lookups (string, integer, float) by key.
//!
//! Does NOT handle:
//! - The process-wide default instance (see `global.rs`).
//! - File format details (see `types.rs`).
//!
//! Invariants:
//! - After a successful load the entries match the file's array order exactly.
//! - A failed load (unreadable file or bad JSON) leaves prior entries untouched.
//! - Lookups return the first entry in stored order whose key matches.
//! - `get_string` and the typed getters only ever match keys case-sensitively,
//!   even though `exists` can match case-insensitively.

use std::path::Path;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::constants::DEFAULT_CONFIG_PATH;
use crate::env::mirror_entries;
use crate::error::{ConfigError, ConversionError};
use crate::types::{ConfigEntry, read_pairs_file};

#[cfg(test)]
mod tests;

/// Ordered key/value configuration loaded from a pairs file.
///
/// Entries sit behind a read-write lock, so a store can be shared between
/// threads. Loading also writes to the process environment, which the lock
/// does not protect: do not call [`ConfigStore::load`] while other threads
/// read or write environment variables.
#[derive(Debug, Default)]
pub struct ConfigStore {
    entries: RwLock<Vec<ConfigEntry>>,
}

impl ConfigStore {
    /// Creates an empty store. Every lookup fails until a load succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store loaded from `path` (or the default path when empty).
    ///
    /// # Errors
    /// Returns the same errors as [`ConfigStore::load`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Creates a store loaded from `path`, falling back to an empty store.
    ///
    /// Load errors are logged and otherwise discarded; probe with
    /// [`ConfigStore::exists`] or [`ConfigStore::is_empty`] to tell.
    pub fn open_or_empty(path: impl AsRef<Path>) -> Self {
        let store = Self::new();
        if let Err(e) = store.load(path.as_ref()) {
            tracing::warn!(
                path = %resolve_path(path.as_ref()).display(),
                error = %e,
                "Failed to load config file, starting with an empty store"
            );
        }
        store
    }

    /// Loads (or reloads) entries from `path`.
    ///
    /// An empty `path` means [`DEFAULT_CONFIG_PATH`]. On success the previous
    /// entries are discarded, not merged, and every entry flagged `osEnv` is
    /// written to the process environment. Entries that cannot be written are
    /// skipped with a warning.
    ///
    /// # Errors
    /// - [`ConfigError::Io`] if the file cannot be read.
    /// - [`ConfigError::Parse`] if the content is not a valid pairs document.
    ///
    /// Either way the store keeps its previous entries.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = resolve_path(path.as_ref());
        let file = read_pairs_file(path)?;

        let mirrored = mirror_entries(&file.pairs);
        let count = file.pairs.len();

        *self.entries.write().unwrap_or_else(PoisonError::into_inner) = file.pairs;

        tracing::debug!(
            path = %path.display(),
            entries = count,
            mirrored,
            "Loaded config file"
        );
        Ok(())
    }

    /// Loads entries from [`DEFAULT_CONFIG_PATH`]. Same as `load("")`.
    pub fn load_default(&self) -> Result<(), ConfigError> {
        self.load("")
    }

    /// Returns true if some entry's key equals `key`.
    ///
    /// With `case_insensitive`, keys that match after lowercasing also count.
    pub fn exists(&self, key: &str, case_insensitive: bool) -> bool {
        contains_key(&self.read(), key, case_insensitive)
    }

    /// Returns the value of the first entry whose key equals `key` exactly.
    ///
    /// # Errors
    /// [`ConfigError::UndefinedKey`] if no entry matches case-sensitively.
    pub fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        let entries = self.read();

        if !contains_key(&entries, key, false) {
            return Err(ConfigError::UndefinedKey(key.to_string()));
        }

        entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.clone())
            .ok_or_else(|| ConfigError::UndefinedKey(key.to_string()))
    }

    /// Returns the value for `key` parsed as a base-10 integer.
    ///
    /// # Errors
    /// - [`ConfigError::UndefinedKey`] as for [`ConfigStore::get_string`].
    /// - [`ConfigError::Conversion`] if the value is not a valid `i64`.
    pub fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        let value = self.get_string(key)?;
        let parsed = value.parse::<i64>();
        parsed.map_err(|e| conversion_error(key, value, e.into()))
    }

    /// Returns the value for `key` parsed as a 64-bit float.
    ///
    /// Finite literals too large for `f64` are rejected rather than rounded
    /// to infinity; `inf`, `infinity` and `nan` are accepted as written.
    ///
    /// # Errors
    /// - [`ConfigError::UndefinedKey`] as for [`ConfigStore::get_string`].
    /// - [`ConfigError::Conversion`] on invalid syntax or overflow.
    pub fn get_float(&self, key: &str) -> Result<f64, ConfigError> {
        let value = self.get_string(key)?;
        parse_float(&value).map_err(|e| conversion_error(key, value, e))
    }

    /// Number of entries currently loaded, duplicates included.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when no entries are loaded.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the loaded entries in stored order.
    pub fn entries(&self) -> Vec<ConfigEntry> {
        self.read().clone()
    }

    // The entries are only ever replaced wholesale, so a poisoned lock still
    // guards a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<ConfigEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}

fn resolve_path(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(DEFAULT_CONFIG_PATH)
    } else {
        path
    }
}

fn contains_key(entries: &[ConfigEntry], key: &str, case_insensitive: bool) -> bool {
    if entries.is_empty() {
        return false;
    }

    entries
        .iter()
        .any(|e| e.key == key || (case_insensitive && eq_lowercase(&e.key, key)))
}

// Lowercases one char at a time, so a final sigma folds like any other.
fn eq_lowercase(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn parse_float(text: &str) -> Result<f64, ConversionError> {
    let value: f64 = text.parse()?;
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(ConversionError::FloatOutOfRange);
    }
    Ok(value)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn conversion_error(key: &str, value: String, source: ConversionError) -> ConfigError {
    ConfigError::Conversion {
        key: key.to_string(),
        value,
        source,
    }
}
