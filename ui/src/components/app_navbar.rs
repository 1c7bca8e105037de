use dioxus::prelude::*;

use super::LanguageSwitcher;
use crate::context::{use_locale, use_session, use_toasts};
use crate::routes::Route;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

struct NavItem {
    route: Route,
    label_key: &'static str,
    icon: &'static str,
}

fn nav_items() -> [NavItem; 5] {
    [
        NavItem {
            route: Route::Dashboard {},
            label_key: "nav-dashboard",
            icon: "🏠",
        },
        NavItem {
            route: Route::Weather {},
            label_key: "nav-weather",
            icon: "☁",
        },
        NavItem {
            route: Route::Market {},
            label_key: "nav-market",
            icon: "📈",
        },
        NavItem {
            route: Route::Schemes {},
            label_key: "nav-schemes",
            icon: "📄",
        },
        NavItem {
            route: Route::Expert {},
            label_key: "nav-expert",
            icon: "💬",
        },
    ]
}

/// Header for signed-in pages: brand, page links with the current one
/// highlighted, the language picker and a user menu with logout.
#[component]
pub fn AppNavbar() -> Element {
    let mut session = use_session();
    let locale = use_locale();
    let toaster = use_toasts();
    let nav = navigator();

    let user = session.read().current().cloned();

    let on_logout = move |_| {
        session.write().logout();
        toaster.info(
            t!(locale, "nav-logout-success"),
            Some(t!(locale, "nav-logout-description")),
        );
        nav.push(Route::Landing {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: Route::Dashboard {},
                    span { class: "navbar__brand-spark", aria_hidden: "true", "🌱" }
                    span { class: "navbar__brand-mark", {t!(locale, "landing-title")} }
                }

                nav { class: "navbar__links",
                    for item in nav_items() {
                        Link {
                            key: "{item.label_key}",
                            class: "navbar__link",
                            active_class: "navbar__link--active",
                            to: item.route,
                            span { class: "navbar__link-icon", aria_hidden: "true", "{item.icon}" }
                            span { {locale.read().t(item.label_key)} }
                        }
                    }
                }

                div { class: "navbar__actions",
                    LanguageSwitcher {}

                    if let Some(user) = user {
                        details { class: "user-menu",
                            summary { class: "user-menu__toggle",
                                span { class: "user-menu__avatar", aria_hidden: "true", "👤" }
                                span { class: "user-menu__name", "{user.name}" }
                            }
                            div { class: "user-menu__panel",
                                p { class: "user-menu__email", "{user.email}" }
                                if let Some(location) = user.location {
                                    p { class: "user-menu__location", "{location}" }
                                }
                                button {
                                    class: "button button--ghost user-menu__logout",
                                    r#type: "button",
                                    onclick: on_logout,
                                    {t!(locale, "nav-logout")}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
