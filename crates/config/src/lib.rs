//! Flat key/value configuration loaded from a JSON file.
//!
//! This crate loads an ordered list of pairs from a file shaped like
//! `{"Pairs": [{"key": "...", "value": "...", "osEnv": false}]}`, optionally
//! mirrors flagged pairs into the process environment, and answers typed
//! lookups (string, integer, float) by key.
//!
//! Use an owned [`ConfigStore`] where initialisation failures matter, or the
//! process-wide [`global()`] handle for zero-config access.

pub mod constants;
mod env;
mod error;
mod global;
mod store;
mod types;

pub use constants::{CONFIG_PATH_ENV_VAR, DEFAULT_CONFIG_PATH};
pub use env::env_var_or_none;
pub use error::{ConfigError, ConversionError, ErrorKind};
pub use global::{exists, get_float, get_int, get_string, global, load};
pub use store::ConfigStore;
pub use types::ConfigEntry;
