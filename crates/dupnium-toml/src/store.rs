//! File-backed preference store.

use dupnium::PreferenceStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// A [`PreferenceStore`] persisting a flat string table to a TOML file.
///
/// The file is read once on open and written through on every
/// `set_string`. A missing file starts empty; an unreadable or malformed
/// file degrades to empty with a logged warning, so a corrupt preference
/// file never prevents startup.
pub struct TomlPreferences {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl TomlPreferences {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(values) => values,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring malformed preference file");
                    BTreeMap::new()
                },
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "ignoring unreadable preference file");
                BTreeMap::new()
            },
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn write_out(&self, values: &BTreeMap<String, String>) {
        let content = match toml::to_string(values) {
            Ok(content) => content,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize preferences");
                return;
            },
        };
        if let Err(error) = fs::write(&self.path, content) {
            tracing::warn!(path = %self.path.display(), %error, "failed to persist preferences");
        }
    }
}

impl PreferenceStore for TomlPreferences {
    fn get_string(&self, name: &str) -> Option<String> {
        self.values.lock().get(name).cloned()
    }

    fn set_string(&self, name: &str, value: &str) {
        let mut values = self.values.lock();
        values.insert(name.to_string(), value.to_string());
        self.write_out(&values);
    }
}
