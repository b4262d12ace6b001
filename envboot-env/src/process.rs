//! Process environment adapter.

use envboot_types::Environment;

/// The process-wide environment table.
///
/// Writes are only valid during single-threaded startup, before any
/// other thread can read the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }

    /// Returns true if the OS can store this pair.
    pub fn accepts(key: &str, value: &str) -> bool {
        !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
    }
}

impl Environment for ProcessEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        if !Self::accepts(key, value) {
            tracing::warn!(key = %key.escape_debug(), "Skipping variable the OS cannot store");
            return;
        }
        // SAFETY: only called while loading configuration at startup, before
        // the process spawns threads.
        unsafe { std::env::set_var(key, value) }
    }
}
