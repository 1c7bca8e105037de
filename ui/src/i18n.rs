//! Internationalization (i18n) support for `kisansarthi-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed` (asset loading into a `FluentLanguageLoader`)
//! - `fluent` (message storage and formatting)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n/
//!   en/kisan-sarthi-ui.ftl   (reference)
//!   hi/kisan-sarthi-ui.ftl
//! ```
//!
//! Each language gets its own loader whose fallback is that same language, so a
//! key missing from Hindi is *not* answered from English. A miss returns the raw
//! key. Lookups never fail.
//!
//! Usage in a component:
//! ```ignore
//! let locale = crate::context::use_locale();
//! let label = crate::t!(locale, "nav-dashboard");
//! ```
//!
//! To add a key: define it in both `.ftl` files. The completeness tests compare the
//! two files and check every `t!` literal in `src/` against the reference file.
use std::collections::HashMap;
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nAssets;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Translate `key` through a `Signal<LocaleStore>` (or anything with `.read().t(..)`).
///
/// ```ignore
/// t!(locale, "nav-dashboard")
/// ```
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $locale.read().t($key)
    };
}

/// Fluent "domain": every locale folder holds `{DOMAIN}.ftl`.
const DOMAIN: &str = "kisan-sarthi-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Hi];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    /// Exact match on the persisted two-letter tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.tag() == tag)
    }

    /// Label shown in the language picker, written in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिन्दी",
        }
    }

    fn language_id(self) -> LanguageIdentifier {
        self.tag()
            .parse()
            .expect("locale tags are valid language identifiers")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Immutable language -> key -> string table, built once at startup.
pub struct Translations {
    loaders: HashMap<Locale, FluentLanguageLoader>,
}

impl Translations {
    /// Load every embedded locale. A locale that fails to load is logged and
    /// left out; lookups against it return raw keys.
    pub fn load() -> Self {
        Self::from_assets(&Localizations)
    }

    /// Load `{locale}/{DOMAIN}.ftl` for every locale from `assets`.
    pub(crate) fn from_assets(assets: &dyn I18nAssets) -> Self {
        let mut loaders = HashMap::new();
        for locale in Locale::ALL {
            let id = locale.language_id();
            let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
            loader.set_use_isolating(false);
            match i18n_embed::select(&loader, assets, &[id]) {
                Ok(_) => {
                    debug!(%locale, "translations loaded");
                    loaders.insert(locale, loader);
                }
                Err(err) => {
                    warn!(%locale, error = %err, "translations unavailable; lookups fall back to keys");
                }
            }
        }
        Self { loaders }
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.loaders
            .get(&locale)
            .is_some_and(|loader| loader.has(key))
    }

    /// `key` in `locale`, or `key` itself when absent.
    pub fn lookup(&self, locale: Locale, key: &str) -> String {
        match self.loaders.get(&locale) {
            Some(loader) if loader.has(key) => loader.get(key),
            _ => key.to_string(),
        }
    }

    pub fn loaded_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|locale| self.loaders.contains_key(locale))
            .collect()
    }
}

impl fmt::Debug for Translations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translations")
            .field("locales", &self.loaded_locales())
            .finish()
    }
}

/// Language folders present in the embedded assets.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_locales_are_embedded() {
        assert_eq!(available_languages(), vec!["en", "hi"]);
    }

    #[test]
    fn tags_round_trip_exactly() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
        assert_eq!(Locale::from_tag("EN"), None);
        assert_eq!(Locale::from_tag("hi-IN"), None);
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn lookup_is_per_language() {
        let table = Translations::load();
        assert_eq!(table.loaded_locales(), Locale::ALL.to_vec());
        assert_eq!(table.lookup(Locale::En, "nav-dashboard"), "Dashboard");
        assert_eq!(table.lookup(Locale::Hi, "nav-dashboard"), "डैशबोर्ड");
        assert_eq!(table.lookup(Locale::Hi, "auth-email-placeholder"), "ram@example.com");
    }

    #[test]
    fn missing_key_returns_key() {
        let table = Translations::load();
        for locale in Locale::ALL {
            assert!(!table.contains(locale, "no-such-key"));
            assert_eq!(table.lookup(locale, "no-such-key"), "no-such-key");
        }
    }

    /// English defines `harvest-ready`, Hindi does not.
    #[derive(Embed)]
    #[folder = "tests/fixtures/i18n"]
    struct PartialFixture;

    #[test]
    fn no_fallback_to_other_language() {
        let table = Translations::from_assets(&PartialFixture);
        assert_eq!(table.loaded_locales(), Locale::ALL.to_vec());

        assert_eq!(table.lookup(Locale::En, "greeting"), "Welcome");
        assert_eq!(table.lookup(Locale::Hi, "greeting"), "स्वागत है");

        assert!(table.contains(Locale::En, "harvest-ready"));
        assert!(!table.contains(Locale::Hi, "harvest-ready"));
        assert_eq!(table.lookup(Locale::En, "harvest-ready"), "Harvest is ready");
        assert_eq!(table.lookup(Locale::Hi, "harvest-ready"), "harvest-ready");
    }
}
