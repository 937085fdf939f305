//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test loading, reloading and failure handling.
//! - Test existence checks and string lookups, including duplicates and case handling.
//! - Test typed integer and float conversions.
//! - Test environment mirroring and default path resolution.
//!
//! Invariants:
//! - Tests touching the environment or working directory use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::store::ConfigStore;
use crate::types::ConfigEntry;

pub mod typed_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Writes a pairs file named `name` into `dir` holding `entries`.
pub fn write_pairs_file(dir: &Path, name: &str, entries: &[ConfigEntry]) -> PathBuf {
    let path = dir.join(name);
    let config = serde_json::json!({ "Pairs": entries });

    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "{}", config).unwrap();

    path
}

/// Writes raw text into `dir/name`.
pub fn write_raw_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Builds a store holding `entries`, loaded through a real file.
pub fn store_with(entries: &[ConfigEntry]) -> ConfigStore {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = write_pairs_file(temp_dir.path(), "conf.json", entries);
    ConfigStore::open(&path).unwrap()
}
