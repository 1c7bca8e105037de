//! Shared UI crate for KisanSarthi. State, data and every page live here; the
//! platform crates only launch [`KisanSarthiApp`].

use dioxus::prelude::*;

pub mod context;
pub mod core;
pub mod data;
pub mod i18n;
pub mod locale;
pub mod routes;
pub mod session;
pub mod views;

pub mod components {
    // Header shown on signed-in pages (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub mod language_switcher;
    pub use language_switcher::LanguageSwitcher;

    pub mod toast;
    pub use toast::{Toast, ToastHost, ToastKind, Toaster};
}

pub use context::KisanSarthiApp;

/// Shared theme, also embedded by the desktop launcher.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
