use std::fmt;
use std::rc::Rc;

use tracing::{debug, info, warn};

use super::{AuthBackend, AuthError, Credentials, Session, SignupRequest};
use crate::core::storage::{self, KeyValueStore, SESSION_KEY};

/// Holds the current session (if any) and keeps the persisted copy in step.
pub struct SessionStore {
    backend: Rc<dyn AuthBackend>,
    storage: Rc<dyn KeyValueStore>,
    current: Option<Session>,
}

impl SessionStore {
    /// Build the store, picking up a session persisted by an earlier run.
    /// An unreadable record is discarded.
    pub fn restore(backend: Rc<dyn AuthBackend>, storage: Rc<dyn KeyValueStore>) -> Self {
        let current = match storage::read_json::<Session>(storage.as_ref(), SESSION_KEY) {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "discarding unreadable persisted session");
                if let Err(err) = storage.remove(SESSION_KEY) {
                    warn!(error = %err, "failed to clear persisted session");
                }
                None
            }
        };

        if let Some(session) = &current {
            debug!(user = %session.id, "restored persisted session");
        }

        Self {
            backend,
            storage,
            current,
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Shared handle to the backend, so callers can await it without holding
    /// a borrow of the store.
    pub fn backend(&self) -> Rc<dyn AuthBackend> {
        Rc::clone(&self.backend)
    }

    /// `Ok(true)` once signed in, `Ok(false)` if email or password is empty.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<bool, AuthError> {
        self.submit(&Credentials::login(email, password)).await
    }

    /// `Ok(true)` once signed in, `Ok(false)` if name, email or password is empty.
    pub async fn signup(&mut self, request: &SignupRequest) -> Result<bool, AuthError> {
        self.submit(&Credentials::Signup(request.clone())).await
    }

    /// [`Credentials::submit`] followed by [`SessionStore::accept`].
    ///
    /// This holds `&mut self` across the backend call. A store kept in a signal
    /// must not stay borrowed over an await, so UI code performs the same two
    /// steps itself: take [`SessionStore::backend`], await `submit`, then
    /// `accept` the outcome.
    pub async fn submit(&mut self, credentials: &Credentials) -> Result<bool, AuthError> {
        let backend = self.backend();
        let outcome = credentials.submit(backend.as_ref()).await?;
        self.accept(outcome)
    }

    /// Apply a backend outcome: install the session or report rejection.
    pub fn accept(&mut self, outcome: Option<Session>) -> Result<bool, AuthError> {
        match outcome {
            Some(session) => {
                self.establish(session)?;
                Ok(true)
            }
            None => {
                debug!("credentials rejected");
                Ok(false)
            }
        }
    }

    /// Persist `session` and make it current. On a storage failure the store
    /// is left unchanged.
    pub fn establish(&mut self, session: Session) -> Result<(), AuthError> {
        storage::write_json(self.storage.as_ref(), SESSION_KEY, &session)?;
        info!(user = %session.id, "session established");
        self.current = Some(session);
        Ok(())
    }

    /// Drop the session and its persisted copy. No-op when signed out.
    pub fn logout(&mut self) {
        let Some(session) = self.current.take() else {
            return;
        };
        if let Err(err) = self.storage.remove(SESSION_KEY) {
            warn!(error = %err, "failed to clear persisted session");
        }
        info!(user = %session.id, "session cleared");
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
