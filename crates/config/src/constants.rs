//! Centralized constants for the configuration store.
//!
//! This module contains default values shared by the store, the
//! process-wide handle, and the tests.

// =============================================================================
// File Locations
// =============================================================================

/// Config file loaded when `load` is called with an empty path.
///
/// Resolved relative to the process working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./conf.json";

/// Environment variable that overrides the file loaded by the process-wide
/// store on first use.
///
/// Only `global()` consults this variable; `ConfigStore::load("")` always
/// means [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV_VAR: &str = "PAIRS_CONFIG_PATH";

