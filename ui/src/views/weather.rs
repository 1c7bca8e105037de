use dioxus::prelude::*;

use crate::context::use_locale;
use crate::core::format::format_celsius;
use crate::data::weather::{advice_by_priority, ALERTS, CURRENT, FARMING_ADVICE, FORECAST};
use crate::t;

fn selected_class(selected: bool) -> &'static str {
    if selected {
        "forecast__day--selected"
    } else {
        ""
    }
}

#[component]
pub fn Weather() -> Element {
    let locale = use_locale();
    let language = locale.read().language();
    let current = &CURRENT;
    let advice = advice_by_priority(&FARMING_ADVICE);
    let mut selected_day = use_signal(|| 0_usize);
    let focus = FORECAST.get(selected_day()).unwrap_or(&FORECAST[0]);

    rsx! {
        section { class: "page page-weather",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "weather-title")} }
                p { class: "page__description", {t!(locale, "weather-description")} }
            }

            article { class: "card weather-current {current.condition.class()}",
                header { class: "card__header",
                    h2 { class: "card__title", {t!(locale, "weather-current")} }
                    p { class: "card__description", "📍 {current.location.get(language)}" }
                }
                div { class: "weather-current__body",
                    div { class: "weather-current__reading",
                        span { class: "weather-current__icon", aria_hidden: "true", "{current.condition.icon()}" }
                        span { class: "weather-current__temp", "{format_celsius(current.temperature)}" }
                        span { class: "weather-current__condition",
                            {locale.read().t(current.condition.label_key())}
                        }
                    }
                    dl { class: "weather-current__details",
                        div {
                            dt { {t!(locale, "dashboard-humidity")} }
                            dd { "{current.humidity}%" }
                        }
                        div {
                            dt { {t!(locale, "dashboard-wind-speed")} }
                            dd { "{current.wind_speed} km/h" }
                        }
                        div {
                            dt { {t!(locale, "weather-visibility")} }
                            dd { "{current.visibility} km" }
                        }
                        div {
                            dt { {t!(locale, "dashboard-uv-index")} }
                            dd { "{current.uv_index}" }
                        }
                        div {
                            dt { {t!(locale, "weather-sunrise")} }
                            dd { "{current.sunrise}" }
                        }
                        div {
                            dt { {t!(locale, "weather-sunset")} }
                            dd { "{current.sunset}" }
                        }
                    }
                }
            }

            article { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!(locale, "weather-weekly-forecast")} }
                    p { class: "card__description", {t!(locale, "weather-upcoming-week")} }
                }
                ol { class: "forecast",
                    for (index, day) in FORECAST.iter().enumerate() {
                        li {
                            key: "{day.day.en}",
                            class: "forecast__day {day.condition.class()} {selected_class(index == selected_day())}",
                            tabindex: "0",
                            onclick: move |_| selected_day.set(index),
                            span { class: "forecast__label", "{day.day.get(language)}" }
                            span { class: "forecast__icon", aria_hidden: "true", "{day.condition.icon()}" }
                            span { class: "forecast__condition", {locale.read().t(day.condition.label_key())} }
                            span { class: "forecast__range",
                                strong { "{format_celsius(day.high)}" }
                                " / {format_celsius(day.low)}"
                            }
                            span { class: "forecast__rain",
                                {t!(locale, "weather-rain-chance")}
                                " {day.rain_chance}%"
                            }
                        }
                    }
                }
                div { class: "forecast__detail",
                    span { class: "forecast__detail-icon", aria_hidden: "true", "{focus.condition.icon()}" }
                    div {
                        h3 { "{focus.day.get(language)}" }
                        p {
                            {locale.read().t(focus.condition.label_key())}
                            " · {format_celsius(focus.high)} / {format_celsius(focus.low)} · "
                            {t!(locale, "weather-rain-chance")}
                            " {focus.rain_chance}%"
                        }
                    }
                }
            }

            div { class: "two-column",
                article { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "weather-farming-advice")} }
                        p { class: "card__description", {t!(locale, "weather-advice-description")} }
                    }
                    div { class: "tip-list",
                        for item in advice {
                            div { key: "{item.title.en}", class: "tip {item.priority.class()}",
                                div { class: "tip__header",
                                    h3 { class: "tip__title", "{item.title.get(language)}" }
                                    span { class: "badge {item.priority.class()}", "{item.priority.label().get(language)}" }
                                }
                                p { class: "tip__body", "{item.body.get(language)}" }
                            }
                        }
                    }
                }

                article { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "weather-alerts")} }
                    }
                    div { class: "tip-list",
                        for alert in ALERTS.iter() {
                            div { key: "{alert.title.en}", class: "alert {alert.tone.class()}", role: "alert",
                                h3 { class: "alert__title", "⚠ {alert.title.get(language)}" }
                                p { class: "alert__body", "{alert.body.get(language)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
