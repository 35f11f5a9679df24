//! Embedded string tables serving a resolver.

use dupnium::{Dupnium, ResourceProvider};
use dupnium_embedded::{EmbeddedAssets, EmbeddedStrings};
use unic_langid::langid;

#[derive(rust_embed::RustEmbed)]
#[folder = "tests/i18n"]
struct TestAssets;

impl EmbeddedAssets for TestAssets {
    fn domain() -> &'static str {
        "app"
    }
}

#[test]
fn discovers_embedded_locales_sorted() {
    let locales = EmbeddedStrings::<TestAssets>::discover_locales();
    assert_eq!(locales, [langid!("en"), langid!("en-GB"), langid!("ru")]);
}

#[test]
fn serves_embedded_sets() {
    let provider = EmbeddedStrings::<TestAssets>::new();

    assert!(provider.has_resource_set(&langid!("en")));
    assert!(provider.has_resource_set(&langid!("en-GB")));
    assert!(!provider.has_resource_set(&langid!("de")));

    assert_eq!(
        provider.string(&langid!("en"), "greeting"),
        Some("Hello".into())
    );
    assert_eq!(provider.string(&langid!("en"), "nope"), None);
}

#[test]
fn resolver_over_embedded_assets() {
    let mut dup = Dupnium::builder()
        .provider(EmbeddedStrings::<TestAssets>::new())
        .fallback_locale(langid!("en"))
        .locale(langid!("en-GB")) // exact regional set exists
        .build()
        .unwrap();

    assert_eq!(dup.lookup("greeting"), "Hello, old bean");
    // en-GB has no menu strings; switch shows the fallback chain is per-set,
    // not per-key: the resolver serves en-GB until told otherwise
    assert_eq!(dup.lookup("menu.quit"), "menu.quit");

    dup.set_locale(langid!("ru")).unwrap();
    assert_eq!(dup.plural("count", 3), "3 файла");

    dup.set_locale(langid!("en-ZZ")).unwrap(); // reduces to "en"
    assert_eq!(dup.plural("count", 1), "1 item");
}
