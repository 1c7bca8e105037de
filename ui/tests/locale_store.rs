use std::rc::Rc;

use ui::core::storage::{KeyValueStore, MemoryStore, StorageError, LANGUAGE_KEY};
use ui::i18n::{Locale, Translations};
use ui::locale::LocaleStore;

fn store_with(storage: Rc<MemoryStore>) -> LocaleStore {
    LocaleStore::restore(Rc::new(Translations::load()), storage, Locale::En)
}

/// Nothing persisted, every write refused.
struct FullDisk;

impl KeyValueStore for FullDisk {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("no space left on device")))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn defaults_to_english_on_first_run() {
    let store = store_with(Rc::new(MemoryStore::new()));
    assert_eq!(store.language(), Locale::En);
    assert_eq!(store.t("nav-logout"), "Logout");
}

#[test]
fn switching_language_persists_and_translates() {
    let storage = Rc::new(MemoryStore::new());
    let mut store = store_with(storage.clone());

    store.set_language(Locale::Hi).unwrap();
    assert_eq!(store.language(), Locale::Hi);
    assert_eq!(store.t("nav-dashboard"), "डैशबोर्ड");
    assert_eq!(storage.get(LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));

    let restored = store_with(storage);
    assert_eq!(restored.language(), Locale::Hi);
}

#[test]
fn unsupported_persisted_tag_falls_back_to_default() {
    let storage = Rc::new(MemoryStore::new());
    storage.set(LANGUAGE_KEY, "fr").unwrap();

    let store = store_with(storage);
    assert_eq!(store.language(), Locale::En);
}

#[test]
fn unknown_key_is_returned_verbatim() {
    let mut store = store_with(Rc::new(MemoryStore::new()));
    assert_eq!(store.t("does-not-exist"), "does-not-exist");
    store.set_language(Locale::Hi).unwrap();
    assert_eq!(store.t("does-not-exist"), "does-not-exist");
}

#[test]
fn every_english_key_has_a_hindi_string() {
    let table = Translations::load();
    for key in ["auth-login-title", "market-title", "schemes-apply-now", "expert-book-now"] {
        assert!(table.contains(Locale::En, key), "{key}");
        assert!(table.contains(Locale::Hi, key), "{key}");
        assert_ne!(table.lookup(Locale::En, key), table.lookup(Locale::Hi, key), "{key}");
    }
}

#[test]
fn switch_applies_even_when_persisting_fails() {
    let mut store = LocaleStore::restore(Rc::new(Translations::load()), Rc::new(FullDisk), Locale::En);

    let err = store.set_language(Locale::Hi).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
    assert_eq!(store.language(), Locale::Hi);
    assert_eq!(store.t("nav-logout"), "लॉगआउट");
}
