use std::time::Duration;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{AuthError, Session, SignupRequest};
use crate::core::timing;

pub const MOCK_USER_ID: &str = "1";
pub const MOCK_USER_NAME: &str = "राम प्रसाद";
pub const MOCK_USER_PHONE: &str = "+91 9876543210";
pub const MOCK_USER_LOCATION: &str = "राजस्थान, भारत";
pub const SIGNUP_LOCATION: &str = "भारत";

/// Where credentials are resolved into sessions.
///
/// `Ok(None)` means the input was rejected. Swapping in a real identity
/// provider only requires another implementation of this trait.
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError>;
    async fn signup(&self, request: &SignupRequest) -> Result<Option<Session>, AuthError>;
}

/// Accepts any non-empty credentials after a fixed delay.
#[derive(Debug, Clone)]
pub struct MockAuthBackend {
    latency: Duration,
}

impl MockAuthBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait(?Send)]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, email: &str, password: &str) -> Result<Option<Session>, AuthError> {
        timing::sleep(self.latency).await;

        if email.is_empty() || password.is_empty() {
            return Ok(None);
        }

        Ok(Some(Session {
            id: MOCK_USER_ID.to_string(),
            name: MOCK_USER_NAME.to_string(),
            email: email.to_string(),
            phone: Some(MOCK_USER_PHONE.to_string()),
            location: Some(MOCK_USER_LOCATION.to_string()),
        }))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Option<Session>, AuthError> {
        timing::sleep(self.latency).await;

        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            return Ok(None);
        }

        Ok(Some(Session {
            id: new_session_id(),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            location: Some(SIGNUP_LOCATION.to_string()),
        }))
    }
}

/// Millisecond timestamp plus a random suffix; sortable by creation time and
/// unique even for signups within the same millisecond.
fn new_session_id() -> String {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &random[..12])
}
