//! Locale state and string lookup.

use crate::device::{DeviceInfo, FormFactor, TABLET_KEY_SUFFIX};
use crate::format::{self, Quantity};
use crate::notify::{ChangeNotifier, LocaleChanged, NullNotifier};
use crate::plural::PluralCategory;
use crate::prefs::{LOCALE_PREFERENCE_KEY, MemoryPreferences, PreferenceStore};
use crate::provider::{ResourceProvider, ResourceSet};
use bon::bon;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Error)]
pub enum LocalizationError {
    /// The fallback locale has no resource set. This is a configuration
    /// defect: the resolver cannot guarantee lookups without a
    /// guaranteed-available locale.
    #[error("no resource set for fallback locale '{0}'")]
    FallbackUnavailable(LanguageIdentifier),
}

/// A `Dupnium` behind a lock, for hosts that share one resolver across
/// threads. Lookups take the read lock; `set_locale` takes the write lock.
pub type SharedDupnium = Arc<RwLock<Dupnium>>;

/// Locale-aware string resolver.
///
/// Owns the locale state: the current locale, the fallback locale, and the
/// handle of the resource set backing lookups. The set invariant holds at
/// all times: lookups are always served by the set resolved for the
/// current locale or, when that locale has no resources, for the fallback
/// locale.
///
/// Construction goes through [`Dupnium::builder`]; see the crate docs for
/// an example. The builder fails when the fallback locale itself has no
/// resource set.
pub struct Dupnium {
    provider: Box<dyn ResourceProvider>,
    preferences: Box<dyn PreferenceStore>,
    notifier: Box<dyn ChangeNotifier>,
    device: Box<dyn DeviceInfo>,
    locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
    active: ResourceSet,
    debug: bool,
}

#[bon]
impl Dupnium {
    /// Build a resolver.
    ///
    /// The startup locale is taken from the `locale` argument when given,
    /// else from the identifier persisted in the preference store, else
    /// from the host system locale, else from the fallback locale. A
    /// startup locale without resources silently degrades to the fallback
    /// locale, exactly as [`Dupnium::set_locale`] does.
    ///
    /// # Errors
    ///
    /// [`LocalizationError::FallbackUnavailable`] when `fallback_locale`
    /// has no resource set.
    #[builder]
    pub fn new(
        provider: impl ResourceProvider + 'static,
        fallback_locale: LanguageIdentifier,
        locale: Option<LanguageIdentifier>,
        preferences: Option<Box<dyn PreferenceStore>>,
        notifier: Option<Box<dyn ChangeNotifier>>,
        device: Option<Box<dyn DeviceInfo>>,
        debug: Option<bool>,
    ) -> Result<Self, LocalizationError> {
        let provider: Box<dyn ResourceProvider> = Box::new(provider);
        let preferences = preferences.unwrap_or_else(|| Box::new(MemoryPreferences::new()));
        let notifier = notifier.unwrap_or_else(|| Box::new(NullNotifier));
        let device = device.unwrap_or_else(|| Box::new(FormFactor::default()));
        let debug = debug.unwrap_or(cfg!(debug_assertions));

        let active = resolve_in(provider.as_ref(), &fallback_locale)
            .ok_or_else(|| LocalizationError::FallbackUnavailable(fallback_locale.clone()))?;

        let startup = locale
            .or_else(|| stored_locale(preferences.as_ref()))
            .or_else(system_locale)
            .unwrap_or_else(|| fallback_locale.clone());

        let mut dup = Self {
            provider,
            preferences,
            notifier,
            device,
            locale: fallback_locale.clone(),
            fallback_locale,
            active,
            debug,
        };
        dup.set_locale(startup)?;
        Ok(dup)
    }

    /// The current locale.
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// The guaranteed-available fallback locale.
    pub fn fallback_locale(&self) -> &LanguageIdentifier {
        &self.fallback_locale
    }

    /// Primary language code of the current locale.
    pub fn language(&self) -> &str {
        self.locale.language.as_str()
    }

    /// Handle of the resource set currently backing lookups.
    pub fn resource_set(&self) -> &ResourceSet {
        &self.active
    }

    /// Whether miss/fallback diagnostics are emitted.
    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Resolve a locale to a resource set without touching any state.
    ///
    /// Tries the exact identifier first, then its primary-language
    /// reduction (`en-US` → `en`). Identifier separators are normalized by
    /// parsing, so `en_US` and `en-US` resolve identically.
    pub fn resolve(&self, locale: &LanguageIdentifier) -> Option<ResourceSet> {
        resolve_in(self.provider.as_ref(), locale)
    }

    /// Switch the current locale.
    ///
    /// On success the resolved set becomes active, the identifier is
    /// persisted, and a [`LocaleChanged`] event is published. A locale
    /// without resources degrades to the fallback locale (diagnostic in
    /// debug mode).
    ///
    /// # Errors
    ///
    /// [`LocalizationError::FallbackUnavailable`] when even the fallback
    /// locale stops resolving, which is possible only with a provider
    /// whose sets change at runtime.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> Result<(), LocalizationError> {
        match self.resolve(&locale) {
            Some(set) => {
                self.active = set;
                self.locale = locale;
                self.preferences
                    .set_string(LOCALE_PREFERENCE_KEY, &self.locale.to_string());
                self.notifier.publish(&LocaleChanged {
                    locale: self.locale.clone(),
                });
                Ok(())
            },
            None if locale != self.fallback_locale => {
                if self.debug {
                    tracing::warn!(
                        requested = %locale,
                        fallback = %self.fallback_locale,
                        "no resource set for requested locale, using fallback"
                    );
                }
                let fallback = self.fallback_locale.clone();
                self.set_locale(fallback)
            },
            None => Err(LocalizationError::FallbackUnavailable(locale)),
        }
    }

    /// Replace the fallback locale and re-resolve the current locale.
    ///
    /// Rejected without touching any state when `fallback` has no resource
    /// set. When the current locale no longer resolves it is reassigned to
    /// the new fallback (publishing a change event); otherwise the active
    /// set is refreshed in place.
    pub fn set_fallback_locale(
        &mut self,
        fallback: LanguageIdentifier,
    ) -> Result<(), LocalizationError> {
        if self.resolve(&fallback).is_none() {
            return Err(LocalizationError::FallbackUnavailable(fallback));
        }
        self.fallback_locale = fallback;

        match self.resolve(&self.locale) {
            Some(set) => {
                self.active = set;
                self.preferences
                    .set_string(LOCALE_PREFERENCE_KEY, &self.locale.to_string());
                Ok(())
            },
            None => {
                if self.debug {
                    tracing::warn!(
                        requested = %self.locale,
                        fallback = %self.fallback_locale,
                        "current locale lost its resource set, using fallback"
                    );
                }
                let fallback = self.fallback_locale.clone();
                self.set_locale(fallback)
            },
        }
    }

    /// Look up a translated string in the active resource set.
    ///
    /// On tablet form factors the `~tablet` variant of the key is probed
    /// first. A missing key returns the key itself (a legible placeholder
    /// beats a crash or a blank UI) and logs a diagnostic in debug mode
    /// with `%` escaped for safe downstream formatting.
    pub fn lookup(&self, key: &str) -> String {
        self.lookup_in(key, None)
    }

    /// [`Dupnium::lookup`] against an override locale.
    ///
    /// The override's resource set is resolved per lookup; when it does not
    /// resolve, the active set serves the probe instead.
    pub fn lookup_in(&self, key: &str, locale: Option<&LanguageIdentifier>) -> String {
        if self.device.is_tablet() {
            let variant = format!("{key}{TABLET_KEY_SUFFIX}");
            if let Some(value) = self.lookup_opt(&variant, locale) {
                return value;
            }
        }

        match self.lookup_opt(key, locale) {
            Some(value) => value,
            None => {
                if self.debug {
                    tracing::warn!(
                        key = %key.replace('%', "%%"),
                        language = %self.language(),
                        "no translation for key"
                    );
                }
                key.to_string()
            },
        }
    }

    /// The exact value for `key`, or `None` when absent.
    ///
    /// Present-but-empty values are valid translations and come back as
    /// `Some("")`.
    pub fn lookup_opt(&self, key: &str, locale: Option<&LanguageIdentifier>) -> Option<String> {
        let resolved;
        let set = match locale.and_then(|requested| self.resolve(requested)) {
            Some(found) => {
                resolved = found;
                &resolved
            },
            None => &self.active,
        };

        let value = self.provider.string(set.locale(), key)?;
        if value.is_empty() {
            tracing::debug!(key, set = %set.locale(), "translation present but empty");
        }
        Some(value)
    }

    /// Look up the pluralized form of `key` for an integer quantity.
    ///
    /// The composite key `key##{category}` is built from the current
    /// language's plural rule and resolved through [`Dupnium::lookup`], so
    /// a missing form degrades to the composite key string. The quantity
    /// is substituted into the template's first numeric directive.
    pub fn plural(&self, key: &str, quantity: i64) -> String {
        self.plural_quantity(key, Quantity::Int(quantity), quantity as f64)
    }

    /// [`Dupnium::plural`] for fractional quantities.
    pub fn plural_float(&self, key: &str, quantity: f64) -> String {
        self.plural_quantity(key, Quantity::Float(quantity), quantity)
    }

    fn plural_quantity(&self, key: &str, quantity: Quantity, numeric: f64) -> String {
        let category = PluralCategory::for_quantity(self.language(), numeric);
        let template = self.lookup(&format!("{key}##{{{category}}}"));
        format::substitute(&template, quantity)
    }

    /// Wrap the resolver for shared multi-threaded use.
    pub fn into_shared(self) -> SharedDupnium {
        Arc::new(RwLock::new(self))
    }
}

fn resolve_in(
    provider: &dyn ResourceProvider,
    locale: &LanguageIdentifier,
) -> Option<ResourceSet> {
    if provider.has_resource_set(locale) {
        return Some(ResourceSet::new(locale.clone()));
    }

    let reduced = locale.language.as_str().parse::<LanguageIdentifier>().ok()?;
    if reduced != *locale && provider.has_resource_set(&reduced) {
        return Some(ResourceSet::new(reduced));
    }

    None
}

fn stored_locale(preferences: &dyn PreferenceStore) -> Option<LanguageIdentifier> {
    let stored = preferences.get_string(LOCALE_PREFERENCE_KEY)?;
    match stored.parse() {
        Ok(locale) => Some(locale),
        Err(_) => {
            tracing::warn!(stored = %stored, "ignoring unparseable persisted locale identifier");
            None
        },
    }
}

fn system_locale() -> Option<LanguageIdentifier> {
    sys_locale::get_locale().and_then(|tag| tag.parse().ok())
}
