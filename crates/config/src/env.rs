//! Process environment helpers.
//!
//! Responsibilities:
//! - Read optional environment variables with empty/whitespace filtering.
//! - Mirror flagged entries into the process environment after a load.
//!
//! Does NOT handle:
//! - Unsetting variables. Nothing in this crate ever removes one.
//! - Reporting mirroring failures to callers. They are logged and skipped.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - An entry that cannot be written never prevents later entries from being written.

use crate::types::ConfigEntry;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Why an entry could not be written to the environment.
fn unsettable_reason(entry: &ConfigEntry) -> Option<&'static str> {
    if entry.key.is_empty() {
        Some("key is empty")
    } else if entry.key.contains('=') {
        Some("key contains '='")
    } else if entry.key.contains('\0') {
        Some("key contains a NUL byte")
    } else if entry.value.contains('\0') {
        Some("value contains a NUL byte")
    } else {
        None
    }
}

/// Sets an environment variable for every entry flagged `mirror_to_env`.
///
/// Entries the platform cannot represent are skipped with a warning.
/// Returns the number of variables written.
///
/// Must not run while other threads read or write the process environment.
pub(crate) fn mirror_entries(entries: &[ConfigEntry]) -> usize {
    let mut mirrored = 0;

    for entry in entries.iter().filter(|e| e.mirror_to_env) {
        if let Some(reason) = unsettable_reason(entry) {
            tracing::warn!(
                key = %entry.key.escape_debug(),
                reason,
                "Skipping config entry that cannot be mirrored into the environment"
            );
            continue;
        }

        // SAFETY: `ConfigStore::load` documents that it must not race with
        // other threads accessing the environment. The key and value were
        // checked above for the inputs `set_var` rejects.
        unsafe { std::env::set_var(&entry.key, &entry.value) };
        mirrored += 1;
    }

    mirrored
}
