//! CLDR plural categorization.
//!
//! Languages disagree on how quantities map to grammatical plural forms:
//! English distinguishes `one`/`other`, East-Slavic languages pick forms by
//! trailing digits, and some languages draw no distinction at all. The rule
//! table here covers the common language families; unknown languages use the
//! English two-form rule.

use unic_langid::LanguageIdentifier;

/// CLDR plural category.
///
/// Rendered lowercase (`zero`, `one`, …) when building composite lookup
/// keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Categorize `quantity` under `language`'s plural rule.
    ///
    /// Pure: identical inputs always yield the identical category.
    #[must_use]
    pub fn for_quantity(language: &str, quantity: f64) -> Self {
        PluralRule::for_language(language).category_for(quantity)
    }
}

/// A plural rule family, selected by primary language code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// No plural distinction (zh, ja, ko, …).
    None,
    /// `one` for exactly 1 (en, de, nl, and the default).
    English,
    /// `one` for quantities below 2, fractions included (fr, hi, bn).
    French,
    /// `one` for 1, `few` for 2–4 (cs, sk).
    Czech,
    /// `one` for 1, `few`/`many` by trailing digits (pl).
    Polish,
    /// `one`/`few`/`many` by trailing digits (ru, uk, sr, …).
    EastSlavic,
    /// `zero` for teens and round tens, `one` for trailing 1 (lv).
    Latvian,
    /// All six categories (ar).
    Arabic,
}

impl PluralRule {
    /// The rule family for a language code.
    ///
    /// Region and script subtags are ignored; `"en-US"`, `"en_US"` and
    /// `"en"` all select the same rule. Unknown languages fall back to
    /// [`PluralRule::English`].
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        let primary = language.split(['-', '_']).next().unwrap_or(language);

        match primary.to_ascii_lowercase().as_str() {
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => Self::None,
            "fr" | "hi" | "bn" => Self::French,
            "cs" | "sk" => Self::Czech,
            "pl" => Self::Polish,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => Self::EastSlavic,
            "lv" => Self::Latvian,
            "ar" => Self::Arabic,
            _ => Self::English,
        }
    }

    /// The rule family for a parsed locale identifier.
    #[must_use]
    pub fn for_locale(locale: &LanguageIdentifier) -> Self {
        Self::for_language(locale.language.as_str())
    }

    /// Map a quantity to its category.
    ///
    /// Trailing-digit rules operate on the integer part of the absolute
    /// value. Fractional quantities take `other` in every family except
    /// French, whose `one` span covers them below 2.
    #[must_use]
    pub fn category_for(self, quantity: f64) -> PluralCategory {
        let fractional = quantity.fract() != 0.0;
        let n = quantity.abs().trunc() as u64;

        match self {
            Self::None => PluralCategory::Other,
            Self::English => {
                if !fractional && n == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            },
            Self::French => {
                if quantity.abs() < 2.0 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            },
            Self::Czech if fractional => PluralCategory::Other,
            Self::Czech => match n {
                1 => PluralCategory::One,
                2..=4 => PluralCategory::Few,
                _ => PluralCategory::Other,
            },
            Self::Polish if fractional => PluralCategory::Other,
            Self::Polish => {
                if n == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            },
            Self::EastSlavic if fractional => PluralCategory::Other,
            Self::EastSlavic => east_slavic(n),
            Self::Latvian if fractional => PluralCategory::Other,
            Self::Latvian => {
                if n % 10 == 0 || (11..=19).contains(&(n % 100)) {
                    PluralCategory::Zero
                } else if n % 10 == 1 {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            },
            Self::Arabic if fractional => PluralCategory::Other,
            Self::Arabic => match n {
                0 => PluralCategory::Zero,
                1 => PluralCategory::One,
                2 => PluralCategory::Two,
                _ if (3..=10).contains(&(n % 100)) => PluralCategory::Few,
                _ if (11..=99).contains(&(n % 100)) => PluralCategory::Many,
                _ => PluralCategory::Other,
            },
        }
    }
}

fn east_slavic(n: u64) -> PluralCategory {
    let mod10 = n % 10;
    let mod100 = n % 100;

    if mod10 == 1 && mod100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en", 0.0, PluralCategory::Other)]
    #[case("en", 1.0, PluralCategory::One)]
    #[case("en", 2.0, PluralCategory::Other)]
    #[case("en", 1.5, PluralCategory::Other)]
    #[case("en-US", 1.0, PluralCategory::One)]
    #[case("en_US", 1.0, PluralCategory::One)]
    #[case("fr", 0.0, PluralCategory::One)]
    #[case("fr", 1.5, PluralCategory::One)]
    #[case("fr", 2.0, PluralCategory::Other)]
    #[case("ja", 1.0, PluralCategory::Other)]
    #[case("ja", 7.0, PluralCategory::Other)]
    #[case("ru", 1.0, PluralCategory::One)]
    #[case("ru", 2.0, PluralCategory::Few)]
    #[case("ru", 5.0, PluralCategory::Many)]
    #[case("ru", 11.0, PluralCategory::Many)]
    #[case("ru", 21.0, PluralCategory::One)]
    #[case("ru", 22.0, PluralCategory::Few)]
    #[case("ru", 100.0, PluralCategory::Many)]
    #[case("ru", 1.5, PluralCategory::Other)]
    #[case("pl", 1.0, PluralCategory::One)]
    #[case("pl", 3.0, PluralCategory::Few)]
    #[case("pl", 13.0, PluralCategory::Many)]
    #[case("pl", 22.0, PluralCategory::Few)]
    #[case("cs", 2.0, PluralCategory::Few)]
    #[case("cs", 5.0, PluralCategory::Other)]
    #[case("lv", 0.0, PluralCategory::Zero)]
    #[case("lv", 11.0, PluralCategory::Zero)]
    #[case("lv", 21.0, PluralCategory::One)]
    #[case("lv", 3.0, PluralCategory::Other)]
    #[case("ar", 0.0, PluralCategory::Zero)]
    #[case("ar", 1.0, PluralCategory::One)]
    #[case("ar", 2.0, PluralCategory::Two)]
    #[case("ar", 7.0, PluralCategory::Few)]
    #[case("ar", 15.0, PluralCategory::Many)]
    #[case("ar", 100.0, PluralCategory::Other)]
    #[case("tlh", 1.0, PluralCategory::One)]
    #[case("tlh", 4.0, PluralCategory::Other)]
    fn categorize(#[case] language: &str, #[case] n: f64, #[case] expected: PluralCategory) {
        assert_eq!(PluralCategory::for_quantity(language, n), expected);
    }

    #[test]
    fn categorization_is_pure() {
        for _ in 0..3 {
            assert_eq!(PluralCategory::for_quantity("ru", 23.0), PluralCategory::Few);
        }
    }

    #[test]
    fn negative_quantities_use_absolute_value() {
        assert_eq!(PluralCategory::for_quantity("en", -1.0), PluralCategory::One);
        assert_eq!(PluralCategory::for_quantity("ru", -22.0), PluralCategory::Few);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(PluralCategory::Zero.to_string(), "zero");
        assert_eq!(PluralCategory::Few.to_string(), "few");
        assert_eq!(PluralCategory::Other.to_string(), "other");
    }

    #[test]
    fn rule_selection_ignores_region() {
        assert_eq!(PluralRule::for_language("ru-RU"), PluralRule::EastSlavic);
        assert_eq!(PluralRule::for_language("ru_RU"), PluralRule::EastSlavic);
        assert_eq!(PluralRule::for_language("PT-br"), PluralRule::English);
        assert_eq!(
            PluralRule::for_locale(&unic_langid::langid!("ar-EG")),
            PluralRule::Arabic
        );
    }
}
