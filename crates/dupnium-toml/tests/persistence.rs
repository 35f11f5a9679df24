//! Locale selection persisted to disk survives a resolver restart.

use dupnium::{Dupnium, StringTable};
use dupnium_toml::TomlPreferences;
use unic_langid::langid;

fn provider() -> StringTable {
    let mut table = StringTable::new();
    table.insert(langid!("en"), "greeting", "Hello");
    table.insert(langid!("ru"), "greeting", "Привет");
    table
}

#[test]
fn restart_reads_the_preference_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("prefs.toml");

    let mut first = Dupnium::builder()
        .provider(provider())
        .fallback_locale(langid!("en"))
        .locale(langid!("en"))
        .preferences(Box::new(TomlPreferences::open(&path)))
        .build()
        .unwrap();
    first.set_locale(langid!("ru")).unwrap();
    drop(first);

    let second = Dupnium::builder()
        .provider(provider())
        .fallback_locale(langid!("en"))
        .preferences(Box::new(TomlPreferences::open(&path)))
        .build()
        .unwrap();

    assert_eq!(second.locale(), &langid!("ru"));
    assert_eq!(second.lookup("greeting"), "Привет");
}
