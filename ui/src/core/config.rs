//! Runtime configuration handed to the app root through context.

use std::time::Duration;

use crate::i18n::Locale;

/// Tunables for the mocked services. Platform launchers use `AppConfig::default()`;
/// tests shorten the delays.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Application name used to locate the native data directory.
    pub app_name: &'static str,
    /// Simulated round-trip for login and signup.
    pub auth_latency: Duration,
    /// Delay before the canned expert reply appears in the quick-question chat.
    pub expert_reply_delay: Duration,
    /// How long a toast stays on screen.
    pub toast_lifetime: Duration,
    /// Language used on first run, before any preference is persisted.
    pub default_locale: Locale,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "KisanSarthi",
            auth_latency: Duration::from_millis(1_000),
            expert_reply_delay: Duration::from_millis(1_000),
            toast_lifetime: Duration::from_millis(4_000),
            default_locale: Locale::En,
        }
    }
}

impl AppConfig {
    /// Configuration with every simulated delay removed.
    pub fn instant() -> Self {
        Self {
            auth_latency: Duration::ZERO,
            expert_reply_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}
