use dioxus::prelude::*;

use crate::context::{use_locale, use_session};
use crate::core::format::{format_celsius, format_percent_change, format_rupees};
use crate::data::dashboard::{self, DAILY_TIPS, MARKET_HIGHLIGHTS};
use super::trend_class;
use crate::routes::Route;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let locale = use_locale();
    let language = locale.read().language();

    let user_name = session
        .read()
        .current()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let today = dashboard::today();

    let services = [
        (Route::Weather {}, "☁", t!(locale, "nav-weather"), t!(locale, "dashboard-service-weather"), "tone--blue"),
        (Route::Market {}, "📈", t!(locale, "nav-market"), t!(locale, "dashboard-service-market"), "tone--green"),
        (Route::Schemes {}, "📄", t!(locale, "nav-schemes"), t!(locale, "dashboard-service-schemes"), "tone--orange"),
        (Route::Expert {}, "💬", t!(locale, "nav-expert"), t!(locale, "dashboard-service-expert"), "tone--purple"),
    ];

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "dashboard-welcome")} ", {user_name}" }
                p { class: "page__description", {t!(locale, "dashboard-welcome-message")} }
            }

            div { class: "stat-grid",
                div { class: "stat-card tone--orange",
                    span { class: "stat-card__label", {t!(locale, "dashboard-today-temp")} }
                    span { class: "stat-card__value", "{format_celsius(today.temperature)}" }
                    span { class: "stat-card__hint",
                        "{today.condition.icon()} "
                        {locale.read().t(today.condition.label_key())}
                    }
                }
                div { class: "stat-card tone--blue",
                    span { class: "stat-card__label", {t!(locale, "dashboard-humidity")} }
                    span { class: "stat-card__value", "{today.humidity}%" }
                    span { class: "stat-card__hint", {t!(locale, "common-normal")} }
                }
                div { class: "stat-card tone--green",
                    span { class: "stat-card__label", {t!(locale, "dashboard-wind-speed")} }
                    span { class: "stat-card__value", "{today.wind_speed} km/h" }
                    span { class: "stat-card__hint", {t!(locale, "common-moderate")} }
                }
                div { class: "stat-card tone--yellow",
                    span { class: "stat-card__label", {t!(locale, "dashboard-uv-index")} }
                    span { class: "stat-card__value", "{today.uv_index}" }
                    span { class: "stat-card__hint", {t!(locale, "dashboard-normal-level")} }
                }
            }

            div { class: "card-grid card-grid--four",
                for (route, icon, title, description, tone) in services {
                    Link { key: "{title}", class: "card service-card {tone}", to: route,
                        span { class: "service-card__icon", aria_hidden: "true", "{icon}" }
                        h3 { class: "card__title", "{title}" }
                        p { class: "card__description", "{description}" }
                    }
                }
            }

            div { class: "two-column",
                article { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "dashboard-market-highlights")} }
                        p { class: "card__description", {t!(locale, "dashboard-market-description")} }
                    }
                    ul { class: "price-list",
                        for item in MARKET_HIGHLIGHTS.iter() {
                            li { key: "{item.crop.en}", class: "price-list__item",
                                span { class: "price-list__name", "{item.crop.get(language)}" }
                                span { class: "price-list__price", "{format_rupees(item.price)}" }
                                span {
                                    class: "{trend_class(item.is_rise())}",
                                    "{format_percent_change(item.change_percent)}"
                                }
                            }
                        }
                    }
                    Link { class: "button button--ghost", to: Route::Market {},
                        {t!(locale, "dashboard-view-all-prices")}
                    }
                }

                article { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "dashboard-today-advice")} }
                        p { class: "card__description", {t!(locale, "dashboard-advice-description")} }
                    }
                    div { class: "tip-list",
                        for tip in DAILY_TIPS.iter() {
                            div { key: "{tip.title.en}", class: "tip {tip.tone.class()}",
                                h3 { class: "tip__title", "{tip.title.get(language)}" }
                                p { class: "tip__body", "{tip.body.get(language)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
