//! Local persistence for the session record and the language preference.
//!
//! Values are plain strings under fixed keys. The browser build writes to
//! `window.localStorage`; native builds keep a single JSON object file in the
//! platform data directory. `MemoryStore` backs tests and any platform where
//! neither is reachable.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::warn;

/// Serialized [`crate::session::Session`] of the signed-in user.
pub const SESSION_KEY: &str = "sarthi_user";
/// Two-letter tag of the active language.
pub const LANGUAGE_KEY: &str = "sarthi_language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable: {0}")]
    Unavailable(String),
    #[error("local storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("browser storage rejected the operation: {0}")]
    Browser(String),
}

/// String-keyed local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and decode a JSON value. A missing key is `Ok(None)`.
pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Open the platform's persistent store, falling back to memory if it cannot be reached.
pub fn default_store(app_name: &str) -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = app_name;
        match BrowserStore::open() {
            Ok(store) => return Rc::new(store),
            Err(err) => warn!(error = %err, "falling back to in-memory storage"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_data_dir(app_name) {
            Ok(store) => {
                tracing::debug!(path = %store.path().display(), "using file storage");
                return Rc::new(store);
            }
            Err(err) => warn!(error = %err, "falling back to in-memory storage"),
        }
    }

    Rc::new(MemoryStore::new())
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`.
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window object".into()))?;
            let storage = window
                .local_storage()
                .map_err(|err| StorageError::Browser(format!("{err:?}")))?
                .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|err| StorageError::Browser(format!("{err:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage
                .set_item(key, value)
                .map_err(|err| StorageError::Browser(format!("{err:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage
                .remove_item(key)
                .map_err(|err| StorageError::Browser(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{KeyValueStore, StorageError};

    const FILE_NAME: &str = "storage.json";

    /// All entries in one JSON object, rewritten on every mutation.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl FileStore {
        /// Load `path`, treating a missing file as empty.
        pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
            let path = path.into();
            let entries = match fs::read_to_string(&path) {
                Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
                Ok(raw) => serde_json::from_str(&raw)?,
                Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
                Err(err) => return Err(err.into()),
            };
            Ok(Self {
                path,
                entries: RefCell::new(entries),
            })
        }

        pub fn in_data_dir(app_name: &str) -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("in", app_name, app_name).ok_or_else(|| {
                StorageError::Unavailable("unable to determine the data directory".into())
            })?;
            Self::open(dirs.data_dir().join(FILE_NAME))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn commit(&self, next: BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let raw = serde_json::to_string_pretty(&next)?;
            fs::write(&self.path, raw)?;
            *self.entries.borrow_mut() = next;
            Ok(())
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut next = self.entries.borrow().clone();
            next.insert(key.to_string(), value.to_string());
            self.commit(next)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            if !self.entries.borrow().contains_key(key) {
                return Ok(());
            }
            let mut next = self.entries.borrow().clone();
            next.remove(key);
            self.commit(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn memory_store_round_trips_and_removes() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);

        store.set(LANGUAGE_KEY, "hi").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));

        store.remove(LANGUAGE_KEY).unwrap();
        assert!(store.is_empty());
        // Removing an absent key is fine.
        store.remove(LANGUAGE_KEY).unwrap();
    }

    #[test]
    fn json_helpers_surface_decode_errors() {
        let store = MemoryStore::new();
        write_json(&store, "sample", &Sample { name: "ram".into() }).unwrap();
        let loaded: Option<Sample> = read_json(&store, "sample").unwrap();
        assert_eq!(loaded, Some(Sample { name: "ram".into() }));

        store.set("sample", "{not json").unwrap();
        let err = read_json::<Sample>(&store, "sample").unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = FileStore::open(&path).unwrap();
        store.set(SESSION_KEY, r#"{"id":"1"}"#).unwrap();
        store.set(LANGUAGE_KEY, "hi").unwrap();
        store.remove(SESSION_KEY).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).unwrap().as_deref(), Some("hi"));
        assert_eq!(reopened.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
