use dioxus::prelude::*;

use super::trend_class;
use crate::context::use_locale;
use crate::core::format::{format_percent_change, format_price_delta, format_rupees};
use crate::data::market::{
    average_change_percent, distinct_markets, filter_crops, highest_price, CropCategory,
    CROP_PRICES, MARKET_TIPS,
};
use crate::t;

const ALL_CATEGORIES: &str = "all";

fn category_value(category: CropCategory) -> &'static str {
    category.label_key()
}

fn parse_category(value: &str) -> Option<CropCategory> {
    CropCategory::ALL
        .into_iter()
        .find(|category| category_value(*category) == value)
}

#[component]
pub fn Market() -> Element {
    let locale = use_locale();
    let language = locale.read().language();
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| Option::<CropCategory>::None);

    let crops = filter_crops(&CROP_PRICES, &query.read(), category(), language);
    let average = average_change_percent(&crops);
    let top = highest_price(&crops);
    let highest = top.map_or_else(|| "-".to_string(), |crop| format_rupees(crop.current_price));
    let highest_caption = top
        .map(|crop| crop.unit_caption(&t!(locale, "market-per-unit"), language))
        .unwrap_or_default();
    let markets = distinct_markets(&crops);
    let selected = category().map_or(ALL_CATEGORIES, category_value);

    rsx! {
        section { class: "page page-market",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "market-title")} }
                p { class: "page__description", {t!(locale, "market-description")} }
            }

            div { class: "toolbar",
                input {
                    class: "field__input toolbar__search",
                    r#type: "search",
                    placeholder: t!(locale, "market-search-placeholder"),
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    class: "toolbar__select",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| category.set(parse_category(&evt.value())),
                    option { value: ALL_CATEGORIES, selected: category().is_none(), {t!(locale, "market-all-categories")} }
                    for choice in CropCategory::ALL {
                        option {
                            key: "{category_value(choice)}",
                            value: category_value(choice),
                            selected: category() == Some(choice),
                            {locale.read().t(choice.label_key())}
                        }
                    }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card tone--green",
                    span { class: "stat-card__label", {t!(locale, "market-total-crops")} }
                    span { class: "stat-card__value", "{crops.len()}" }
                    span { class: "stat-card__hint", {t!(locale, "market-available-prices")} }
                }
                div { class: "stat-card tone--blue",
                    span { class: "stat-card__label", {t!(locale, "market-average-growth")} }
                    span { class: "stat-card__value", "{format_percent_change(average)}" }
                    span { class: "stat-card__hint", {t!(locale, "market-since-last-week")} }
                }
                div { class: "stat-card tone--orange",
                    span { class: "stat-card__label", {t!(locale, "market-highest-price")} }
                    span { class: "stat-card__value", "{highest}" }
                    span { class: "stat-card__hint", "{highest_caption}" }
                }
                div { class: "stat-card tone--purple",
                    span { class: "stat-card__label", {t!(locale, "market-active-markets")} }
                    span { class: "stat-card__value", "{markets}" }
                    span { class: "stat-card__hint", {t!(locale, "market-across-states")} }
                }
            }

            article { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!(locale, "market-today-prices")} }
                    p { class: "card__description", {t!(locale, "market-fresh-prices")} }
                }
                div { class: "crop-grid",
                    for crop in crops.iter().copied() {
                        div { key: "{crop.name.en}", class: "crop-card",
                            div { class: "crop-card__header",
                                h3 { class: "crop-card__name", "{crop.name.get(language)}" }
                                span { class: "badge", {locale.read().t(crop.grade.label_key())} }
                            }
                            p { class: "crop-card__market", "📍 {crop.market.get(language)}" }
                            p { class: "crop-card__price",
                                "{format_rupees(crop.current_price)}"
                                span { class: "crop-card__unit",
                                    " / {crop.unit.get(language)}"
                                }
                            }
                            p { class: "{trend_class(crop.change().is_rise())}",
                                "{format_price_delta(crop.change().amount)} ({format_percent_change(crop.change().percent)})"
                            }
                            span { class: "crop-card__category", {locale.read().t(crop.category.label_key())} }
                        }
                    }
                }
            }

            article { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!(locale, "market-tips-title")} }
                    p { class: "card__description", {t!(locale, "market-tips-description")} }
                }
                div { class: "tip-grid",
                    for tip in MARKET_TIPS.iter() {
                        div { key: "{tip.title_key}", class: "tip {tip.tone.class()}",
                            h3 { class: "tip__title", {locale.read().t(tip.title_key)} }
                            p { class: "tip__body", "{tip.body.get(language)}" }
                        }
                    }
                }
            }
        }
    }
}
