use dioxus::prelude::*;
use tracing::warn;

use crate::context::use_locale;
use crate::routes::Route;
use crate::t;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let locale = use_locale();
    let path = format!("/{}", segments.join("/"));

    use_hook({
        let path = path.clone();
        move || warn!(%path, "no route matches")
    });

    rsx! {
        section { class: "page page-not-found",
            p { class: "page-not-found__code", "404" }
            h1 { class: "page__title", {t!(locale, "not-found-title")} }
            p { class: "page__description", {t!(locale, "not-found-message")} }
            p { class: "page-not-found__path", code { "{path}" } }
            Link { class: "button button--primary", to: Route::Landing {},
                {t!(locale, "not-found-home")}
            }
        }
    }
}
