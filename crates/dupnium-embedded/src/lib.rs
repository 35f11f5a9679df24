#![doc = include_str!("../README.md")]

use dupnium::ResourceProvider;
use parking_lot::RwLock;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Embedded asset folder holding one directory per locale.
pub trait EmbeddedAssets: RustEmbed + Send + Sync + 'static {
    /// Basename of the table file inside each locale directory
    /// (`{locale}/{domain}.toml`).
    fn domain() -> &'static str;
}

type Table = Arc<HashMap<String, String>>;

/// A [`ResourceProvider`] over embedded per-locale TOML tables.
///
/// Tables are parsed on first use and cached; absence is cached too, so a
/// locale the binary does not carry is probed at most once.
pub struct EmbeddedStrings<T: EmbeddedAssets> {
    tables: RwLock<HashMap<LanguageIdentifier, Option<Table>>>,
    _assets: std::marker::PhantomData<T>,
}

impl<T: EmbeddedAssets> EmbeddedStrings<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
            _assets: std::marker::PhantomData,
        }
    }

    /// The locales whose table file is present in the embedded folder,
    /// sorted by identifier.
    pub fn discover_locales() -> Vec<LanguageIdentifier> {
        let file_name = format!("/{}.toml", T::domain());
        let mut locales: Vec<LanguageIdentifier> = T::iter()
            .filter_map(|path| {
                path.strip_suffix(&file_name)
                    .and_then(|dir| dir.parse().ok())
            })
            .collect();

        locales.sort_by_key(|locale| locale.to_string());
        locales
    }

    fn table(&self, locale: &LanguageIdentifier) -> Option<Table> {
        if let Some(cached) = self.tables.read().get(locale) {
            return cached.clone();
        }

        let loaded = Self::load(locale);
        self.tables.write().insert(locale.clone(), loaded.clone());
        loaded
    }

    fn load(locale: &LanguageIdentifier) -> Option<Table> {
        let path = format!("{}/{}.toml", locale, T::domain());
        let file = T::get(&path)?;

        let content = match std::str::from_utf8(&file.data) {
            Ok(content) => content,
            Err(error) => {
                tracing::error!(%path, %error, "embedded table is not UTF-8");
                return None;
            },
        };

        match toml::from_str::<HashMap<String, String>>(content) {
            Ok(table) => Some(Arc::new(table)),
            Err(error) => {
                tracing::error!(%path, %error, "failed to parse embedded table");
                None
            },
        }
    }
}

impl<T: EmbeddedAssets> Default for EmbeddedStrings<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EmbeddedAssets> ResourceProvider for EmbeddedStrings<T> {
    fn has_resource_set(&self, locale: &LanguageIdentifier) -> bool {
        self.table(locale).is_some()
    }

    fn string(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        self.table(locale)?.get(key).cloned()
    }
}
