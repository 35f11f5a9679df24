#![doc = include_str!("../README.md")]

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, LanguageIdentifierError};

mod store;

pub use store::TomlPreferences;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("dupnium.toml configuration file not found")]
    NotFound,
    /// Failed to read the configuration file.
    #[error("failed to read configuration file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file.
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    /// A locale field does not hold a valid identifier.
    #[error("invalid locale identifier '{name}'")]
    InvalidLocale {
        /// The offending value.
        name: String,
        /// The parsing error produced by `unic-langid`.
        #[source]
        source: LanguageIdentifierError,
    },
}

/// Startup configuration, read from `dupnium.toml`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DupniumConfig {
    /// The guaranteed-available locale (e.g. "en"). Resources for it must
    /// exist or resolver construction fails.
    pub fallback_locale: String,
    /// Optional startup locale, overriding the persisted preference.
    #[serde(default)]
    pub locale: Option<String>,
    /// Whether miss/fallback diagnostics are emitted. Defaults to the
    /// build profile when absent.
    #[serde(default)]
    pub debug: Option<bool>,
}

impl DupniumConfig {
    /// Read the configuration from a path.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        let content = fs::read_to_string(path)?;
        let config: DupniumConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// The fallback locale as a parsed identifier.
    pub fn fallback_locale_identifier(&self) -> Result<LanguageIdentifier, ConfigError> {
        parse_locale(&self.fallback_locale)
    }

    /// The startup locale override as a parsed identifier, when configured.
    pub fn locale_identifier(&self) -> Result<Option<LanguageIdentifier>, ConfigError> {
        self.locale.as_deref().map(parse_locale).transpose()
    }
}

fn parse_locale(name: &str) -> Result<LanguageIdentifier, ConfigError> {
    name.parse().map_err(|source| ConfigError::InvalidLocale {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unic_langid::langid;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("dupnium.toml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_minimal_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "fallback_locale = \"en\"\n");

        let config = DupniumConfig::read_from_path(&path).unwrap();

        assert_eq!(config.fallback_locale, "en");
        assert!(config.locale.is_none());
        assert!(config.debug.is_none());
        assert_eq!(config.fallback_locale_identifier().unwrap(), langid!("en"));
        assert_eq!(config.locale_identifier().unwrap(), None);
    }

    #[test]
    fn reads_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "fallback_locale = \"en\"\nlocale = \"nl_NL\"\ndebug = false\n",
        );

        let config = DupniumConfig::read_from_path(&path).unwrap();

        assert_eq!(config.debug, Some(false));
        // underscore separator normalizes through parsing
        assert_eq!(config.locale_identifier().unwrap(), Some(langid!("nl-NL")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = DupniumConfig::read_from_path("/no/such/dupnium.toml");
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "fallback_locale = [1, 2]\n");

        let result = DupniumConfig::read_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn invalid_identifier_names_the_value() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "fallback_locale = \"not a locale!\"\n");

        let config = DupniumConfig::read_from_path(&path).unwrap();
        let result = config.fallback_locale_identifier();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidLocale { name, .. }) if name == "not a locale!"
        ));
    }
}
