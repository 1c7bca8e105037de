//! Mocked authentication.
//!
//! [`SessionStore`] owns the signed-in [`Session`] and its persisted copy. Credential
//! checks go through an [`AuthBackend`]; the only implementation is
//! [`MockAuthBackend`], which waits a fixed latency and accepts any non-empty input.

mod backend;
mod store;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::storage::StorageError;

pub use backend::{AuthBackend, MockAuthBackend, MOCK_USER_NAME};
pub use store::SessionStore;

/// The authenticated user. Persisted as JSON under [`crate::core::storage::SESSION_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Fields collected by the signup form.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            phone: None,
        }
    }

    /// An empty phone field means "not provided".
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        let phone = phone.into();
        self.phone = (!phone.is_empty()).then_some(phone);
        self
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// What an auth form submits.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login { email: String, password: String },
    Signup(SignupRequest),
}

impl Credentials {
    pub fn login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Resolve against `backend` without touching any store. `Ok(None)` means the
    /// input was rejected.
    pub async fn submit(&self, backend: &dyn AuthBackend) -> Result<Option<Session>, AuthError> {
        match self {
            Self::Login { email, password } => backend.login(email, password).await,
            Self::Signup(request) => backend.signup(request).await,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Signup(request) => f.debug_tuple("Signup").field(request).finish(),
        }
    }
}

/// Unexpected failures. Rejected credentials are not an error; they surface as `Ok(false)`.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication backend failed: {0}")]
    Backend(String),
    #[error("could not persist the session: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_json_omits_absent_optionals() {
        let session = Session {
            id: "1".into(),
            name: "Ram".into(),
            email: "ram@example.com".into(),
            phone: None,
            location: None,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert_eq!(json, r#"{"id":"1","name":"Ram","email":"ram@example.com"}"#);
        let back: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }

    #[test]
    fn empty_phone_is_dropped_and_password_is_redacted() {
        let request = SignupRequest::new("Ram", "ram@example.com", "secret").with_phone("");
        assert_eq!(request.phone, None);
        let printed = format!("{request:?}");
        assert!(!printed.contains("secret"));
        assert!(printed.contains("<redacted>"));

        let printed = format!("{:?}", Credentials::login("ram@example.com", "hunter2"));
        assert!(printed.contains("ram@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
