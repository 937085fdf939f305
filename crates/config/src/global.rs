//! Process-wide configuration store.
//!
//! Responsibilities:
//! - Lazily create one shared `ConfigStore`, loaded best-effort on first use.
//! - Offer free functions over that store for zero-config call sites.
//!
//! Does NOT handle:
//! - Surfacing the first-use load failure. It is logged; probe with `exists`.
//!
//! Invariants:
//! - First use loads `PAIRS_CONFIG_PATH` when set and non-blank, else `./conf.json`.
//! - Later `load` calls replace the shared entries exactly like `ConfigStore::load`.

use std::path::Path;
use std::sync::OnceLock;

use crate::constants::CONFIG_PATH_ENV_VAR;
use crate::env::env_var_or_none;
use crate::error::ConfigError;
use crate::store::ConfigStore;

/// Returns the process-wide store, loading it on first call.
pub fn global() -> &'static ConfigStore {
    static STORE: OnceLock<ConfigStore> = OnceLock::new();
    STORE.get_or_init(|| {
        let path = env_var_or_none(CONFIG_PATH_ENV_VAR).unwrap_or_default();
        ConfigStore::open_or_empty(path)
    })
}

/// Reloads the process-wide store. See [`ConfigStore::load`].
pub fn load(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    global().load(path)
}

/// See [`ConfigStore::exists`].
pub fn exists(key: &str, case_insensitive: bool) -> bool {
    global().exists(key, case_insensitive)
}

/// See [`ConfigStore::get_string`].
pub fn get_string(key: &str) -> Result<String, ConfigError> {
    global().get_string(key)
}

/// See [`ConfigStore::get_int`].
pub fn get_int(key: &str) -> Result<i64, ConfigError> {
    global().get_int(key)
}

/// See [`ConfigStore::get_float`].
pub fn get_float(key: &str) -> Result<f64, ConfigError> {
    global().get_float(key)
}
