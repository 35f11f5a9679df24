#![doc = include_str!("../README.md")]

pub mod device;
mod format;
pub mod notify;
pub mod plural;
pub mod prefs;
pub mod provider;
pub mod resolver;

pub use device::{DeviceInfo, FormFactor, TABLET_KEY_SUFFIX};
pub use notify::{CallbackNotifier, ChangeNotifier, LocaleChanged, NullNotifier};
pub use plural::{PluralCategory, PluralRule};
pub use prefs::{LOCALE_PREFERENCE_KEY, MemoryPreferences, PreferenceStore};
pub use provider::{ResourceProvider, ResourceSet, StringTable};
pub use resolver::{Dupnium, LocalizationError, SharedDupnium};

pub use unic_langid;
pub use unic_langid::LanguageIdentifier;
