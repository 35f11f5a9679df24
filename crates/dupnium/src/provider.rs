//! The resource-provider seam and the in-memory provider.

use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// A source of per-locale string resources.
///
/// A provider serves zero or more resource sets, each addressed by the
/// locale identifier it was registered under. Presence is explicit: a key
/// that a set does not contain is `None`, never an echoed key or a sentinel
/// value.
pub trait ResourceProvider: Send + Sync {
    /// Whether a resource set exists for exactly this locale identifier.
    fn has_resource_set(&self, locale: &LanguageIdentifier) -> bool;

    /// The value of `key` in the set registered under `locale`.
    fn string(&self, locale: &LanguageIdentifier, key: &str) -> Option<String>;
}

/// Handle to a resolved resource set.
///
/// Carries the locale identifier the provider matched, which may be the
/// requested identifier or its primary-language reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    locale: LanguageIdentifier,
}

impl ResourceSet {
    pub(crate) fn new(locale: LanguageIdentifier) -> Self {
        Self { locale }
    }

    /// The identifier the set was resolved under.
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }
}

/// In-memory string tables keyed by locale.
///
/// The provider used by tests and small applications that assemble their
/// translations in code.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    tables: HashMap<LanguageIdentifier, HashMap<String, String>>,
}

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a translation, creating the locale's table on first use.
    pub fn insert(
        &mut self,
        locale: LanguageIdentifier,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.tables
            .entry(locale)
            .or_default()
            .insert(key.into(), value.into());
    }

    /// The locales this table can serve.
    pub fn locales(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.tables.keys()
    }
}

impl ResourceProvider for StringTable {
    fn has_resource_set(&self, locale: &LanguageIdentifier) -> bool {
        self.tables.contains_key(locale)
    }

    fn string(&self, locale: &LanguageIdentifier, key: &str) -> Option<String> {
        self.tables.get(locale)?.get(key).cloned()
    }
}
