use dioxus::prelude::*;

use crate::components::LanguageSwitcher;
use crate::context::{use_locale, use_session};
use crate::routes::{AuthMode, Route};
use crate::t;

/// Public home. Signed-in visitors go straight to the dashboard.
#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let locale = use_locale();
    let nav = navigator();

    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let features = [
        ("☁", t!(locale, "feature-weather-title"), t!(locale, "feature-weather-description"), "tone--blue"),
        ("📈", t!(locale, "feature-market-title"), t!(locale, "feature-market-description"), "tone--green"),
        ("📄", t!(locale, "feature-schemes-title"), t!(locale, "feature-schemes-description"), "tone--orange"),
        ("💬", t!(locale, "feature-expert-title"), t!(locale, "feature-expert-description"), "tone--purple"),
    ];

    rsx! {
        div { class: "landing",
            header { class: "landing__header",
                div { class: "landing__brand",
                    span { class: "landing__logo", aria_hidden: "true", "🌱" }
                    div {
                        h1 { class: "landing__title", {t!(locale, "landing-title")} }
                        p { class: "landing__subtitle", {t!(locale, "landing-subtitle")} }
                    }
                }
                div { class: "landing__actions",
                    LanguageSwitcher {}
                    Link { class: "button button--ghost", to: AuthMode::Login.route(),
                        {t!(locale, "landing-login")}
                    }
                    Link { class: "button button--primary", to: AuthMode::Signup.route(),
                        {t!(locale, "landing-register")}
                    }
                }
            }

            section { class: "landing__hero",
                h2 { class: "landing__hero-title", {t!(locale, "landing-hero-title")} }
                p { class: "landing__hero-description", {t!(locale, "landing-hero-description")} }
                div { class: "landing__hero-actions",
                    Link { class: "button button--primary button--large", to: AuthMode::Signup.route(),
                        {t!(locale, "landing-get-started")}
                    }
                    a { class: "button button--ghost button--large", href: "tel:18001801551",
                        {t!(locale, "landing-contact")}
                    }
                }
            }

            section { class: "landing__services",
                h2 { class: "section-title", {t!(locale, "landing-services-title")} }
                p { class: "section-description", {t!(locale, "landing-services-description")} }
                div { class: "card-grid card-grid--four",
                    for (icon, title, description, tone) in features {
                        article { key: "{title}", class: "card feature-card {tone}",
                            span { class: "feature-card__icon", aria_hidden: "true", "{icon}" }
                            h3 { class: "card__title", "{title}" }
                            p { class: "card__description", "{description}" }
                        }
                    }
                }
            }

            section { class: "landing__cta",
                h2 { {t!(locale, "landing-cta-title")} }
                p { {t!(locale, "landing-cta-description")} }
                Link { class: "button button--accent button--large", to: AuthMode::Signup.route(),
                    {t!(locale, "landing-register-free")}
                }
            }

            footer { class: "landing__footer",
                p { {t!(locale, "landing-footer")} }
            }
        }
    }
}
