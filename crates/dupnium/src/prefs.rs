//! Preference persistence seam.
//!
//! The resolver stores the selected locale identifier through a
//! [`PreferenceStore`] so the next startup restores it. The file-backed
//! implementation lives in the `dupnium-toml` crate; [`MemoryPreferences`]
//! covers tests and hosts without persistent storage.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Preference name the selected locale identifier is stored under.
pub const LOCALE_PREFERENCE_KEY: &str = "dupnium.locale";

/// A persisted string-to-string preference store.
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, name: &str) -> Option<String>;
    fn set_string(&self, name: &str, value: &str);
}

/// Process-local preference store.
///
/// Clones share the same backing map, so a test can keep a handle and
/// observe what the resolver persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, name: &str) -> Option<String> {
        self.values.lock().get(name).cloned()
    }

    fn set_string(&self, name: &str, value: &str) {
        self.values.lock().insert(name.to_string(), value.to_string());
    }
}
