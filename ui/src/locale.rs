//! The active language and the `t(key)` lookup bound to it.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::core::storage::{KeyValueStore, StorageError, LANGUAGE_KEY};
use crate::i18n::{Locale, Translations};

pub struct LocaleStore {
    language: Locale,
    table: Rc<Translations>,
    storage: Rc<dyn KeyValueStore>,
}

impl LocaleStore {
    /// Start from `default`, overridden by a valid persisted tag.
    pub fn restore(
        table: Rc<Translations>,
        storage: Rc<dyn KeyValueStore>,
        default: Locale,
    ) -> Self {
        let language = match storage.get(LANGUAGE_KEY) {
            Ok(Some(tag)) => Locale::from_tag(&tag).unwrap_or_else(|| {
                warn!(%tag, "ignoring unsupported persisted language");
                default
            }),
            Ok(None) => default,
            Err(err) => {
                warn!(error = %err, "could not read language preference");
                default
            }
        };
        debug!(%language, "locale restored");

        Self {
            language,
            table,
            storage,
        }
    }

    pub fn language(&self) -> Locale {
        self.language
    }

    /// Switch language and persist the tag. The switch takes effect even if
    /// persisting fails; the error is returned for logging.
    pub fn set_language(&mut self, locale: Locale) -> Result<(), StorageError> {
        self.language = locale;
        self.storage.set(LANGUAGE_KEY, locale.tag())
    }

    /// `key` in the active language, or `key` itself when absent.
    pub fn t(&self, key: &str) -> String {
        self.table.lookup(self.language, key)
    }

    pub fn translations(&self) -> &Translations {
        &self.table
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("language", &self.language)
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}
