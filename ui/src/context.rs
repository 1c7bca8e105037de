//! App root and the context hooks every page reads from.
//!
//! The root builds the stores once and hands them down as signals, so pages
//! re-render when the session or language changes.

use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::components::toast::{use_toaster, ToastHost, Toaster};
use crate::core::config::AppConfig;
use crate::core::platform::Platform;
use crate::core::storage::{self, KeyValueStore};
use crate::i18n::Translations;
use crate::locale::LocaleStore;
use crate::routes::Route;
use crate::session::{MockAuthBackend, SessionStore};
use crate::THEME_CSS;

/// Root component shared by every launcher. A launcher may supply its own
/// [`AppConfig`] through context; otherwise the defaults apply.
#[component]
pub fn KisanSarthiApp() -> Element {
    let config = use_context_provider(|| try_consume_context::<AppConfig>().unwrap_or_default());

    let store: Rc<dyn KeyValueStore> = use_hook(|| {
        info!(
            app = config.app_name,
            platform = Platform::current().label(),
            "starting"
        );
        storage::default_store(config.app_name)
    });
    let translations = use_hook(|| Rc::new(Translations::load()));

    use_context_provider({
        let store = store.clone();
        let latency = config.auth_latency;
        move || Signal::new(SessionStore::restore(Rc::new(MockAuthBackend::new(latency)), store))
    });
    let locale = use_context_provider({
        let default_locale = config.default_locale;
        move || Signal::new(LocaleStore::restore(translations, store, default_locale))
    });

    let toaster = use_toaster(config.toast_lifetime);
    use_context_provider(|| toaster);

    let lang = locale.read().language().tag();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "app", lang: "{lang}",
            Router::<Route> {}
            ToastHost {}
        }
    }
}

pub fn use_session() -> Signal<SessionStore> {
    use_context()
}

pub fn use_locale() -> Signal<LocaleStore> {
    use_context()
}

pub fn use_toasts() -> Toaster {
    use_context()
}

pub fn use_app_config() -> AppConfig {
    use_context()
}
