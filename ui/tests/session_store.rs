use std::rc::Rc;

use ui::core::config::AppConfig;
use ui::core::storage::{KeyValueStore, MemoryStore, StorageError, SESSION_KEY};
use ui::session::{
    AuthError, Credentials, MockAuthBackend, Session, SessionStore, SignupRequest,
    MOCK_USER_NAME,
};

fn backend() -> Rc<MockAuthBackend> {
    Rc::new(MockAuthBackend::new(AppConfig::instant().auth_latency))
}

fn fresh_store() -> (Rc<MemoryStore>, SessionStore) {
    let storage = Rc::new(MemoryStore::new());
    let store = SessionStore::restore(backend(), storage.clone());
    (storage, store)
}

/// Reads succeed, writes always fail.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}

/// Writes succeed, removals always fail.
#[derive(Default)]
struct StickyStore {
    inner: MemoryStore,
}

impl KeyValueStore for StickyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Browser("SecurityError".into()))
    }
}

#[tokio::test]
async fn login_sets_and_persists_the_mock_user() {
    let (storage, mut store) = fresh_store();
    assert!(!store.is_authenticated());

    assert!(store.login("ram@example.com", "secret").await.unwrap());

    let session = store.current().unwrap();
    assert_eq!(session.email, "ram@example.com");
    assert_eq!(session.name, MOCK_USER_NAME);
    let persisted = storage.get(SESSION_KEY).unwrap().unwrap();
    let persisted: Session = serde_json::from_str(&persisted).unwrap();
    assert_eq!(&persisted, session);
}

#[tokio::test]
async fn empty_credentials_are_rejected_without_side_effects() {
    let (storage, mut store) = fresh_store();

    assert!(!store.login("", "secret").await.unwrap());
    assert!(!store.login("ram@example.com", "").await.unwrap());
    assert!(!store.is_authenticated());
    assert!(storage.is_empty());
}

#[tokio::test]
async fn signup_uses_form_fields() {
    let (_storage, mut store) = fresh_store();
    let request = SignupRequest::new("Sita Devi", "sita@example.com", "pw").with_phone("+91 90000 00000");

    assert!(store.signup(&request).await.unwrap());

    let session = store.current().unwrap();
    assert_eq!(session.name, "Sita Devi");
    assert_eq!(session.email, "sita@example.com");
    assert_eq!(session.phone.as_deref(), Some("+91 90000 00000"));
    assert_ne!(session.id, "1");
}

#[tokio::test]
async fn signup_requires_name() {
    let (_storage, mut store) = fresh_store();
    let request = SignupRequest::new("", "sita@example.com", "pw");
    assert!(!store.signup(&request).await.unwrap());
    assert!(store.current().is_none());
}

#[tokio::test]
async fn session_survives_a_restart() {
    let (storage, mut store) = fresh_store();
    store.login("ram@example.com", "secret").await.unwrap();

    let restored = SessionStore::restore(backend(), storage);
    assert_eq!(restored.current(), store.current());
}

#[tokio::test]
async fn logout_clears_memory_and_storage() {
    let (storage, mut store) = fresh_store();
    store.login("ram@example.com", "secret").await.unwrap();

    store.logout();
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

    // Logging out twice is harmless.
    store.logout();
}

#[test]
fn corrupt_persisted_session_is_discarded() {
    let storage = Rc::new(MemoryStore::new());
    storage.set(SESSION_KEY, "{\"id\": 1").unwrap();

    let store = SessionStore::restore(backend(), storage.clone());
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
}

#[tokio::test]
async fn failed_persist_leaves_store_signed_out() {
    let mut store = SessionStore::restore(backend(), Rc::new(ReadOnlyStore));

    let err = store.login("ram@example.com", "secret").await.unwrap_err();
    assert!(matches!(err, AuthError::Storage(_)));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn logout_clears_memory_even_if_storage_refuses() {
    let storage = Rc::new(StickyStore::default());
    let mut store = SessionStore::restore(backend(), storage.clone());
    assert!(store.login("ram@example.com", "secret").await.unwrap());

    store.logout();
    assert!(!store.is_authenticated());
    assert!(store.current().is_none());
}

#[tokio::test]
async fn submit_then_accept_matches_store_login() {
    let (storage, mut store) = fresh_store();

    // The auth form releases the store while the backend call is pending.
    let backend = store.backend();
    let outcome = Credentials::login("ram@example.com", "secret")
        .submit(backend.as_ref())
        .await
        .unwrap();
    assert!(store.accept(outcome).unwrap());
    assert_eq!(store.current().unwrap().name, MOCK_USER_NAME);
    assert!(!storage.is_empty());

    let rejected = Credentials::Signup(SignupRequest::new("Sita", "", "pw"))
        .submit(backend.as_ref())
        .await
        .unwrap();
    assert_eq!(rejected, None);
    assert!(!store.accept(rejected).unwrap());
    assert_eq!(store.current().unwrap().name, MOCK_USER_NAME);
}
