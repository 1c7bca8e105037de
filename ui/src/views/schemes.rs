use dioxus::prelude::*;

use crate::context::use_locale;
use crate::data::schemes::{
    active_count, filter_schemes, SchemeCategory, PROCESSING_DAYS_LABEL, SCHEMES,
    TOTAL_BENEFIT_LABEL,
};
use crate::t;

const HELPLINE: &str = "tel:18001801551";

fn chip_class(active: bool) -> &'static str {
    if active {
        "chip chip--active"
    } else {
        "chip"
    }
}

#[component]
pub fn Schemes() -> Element {
    let locale = use_locale();
    let language = locale.read().language();
    let mut category = use_signal(|| Option::<SchemeCategory>::None);
    let mut expanded = use_signal(|| Option::<&'static str>::None);

    let visible = filter_schemes(&SCHEMES, category());

    rsx! {
        section { class: "page page-schemes",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "schemes-title")} }
                p { class: "page__description", {t!(locale, "schemes-description")} }
            }

            div { class: "stat-grid",
                div { class: "stat-card tone--blue",
                    span { class: "stat-card__label", {t!(locale, "schemes-total-schemes")} }
                    span { class: "stat-card__value", "{SCHEMES.len()}" }
                    span { class: "stat-card__hint", {t!(locale, "schemes-available-schemes")} }
                }
                div { class: "stat-card tone--green",
                    span { class: "stat-card__label", {t!(locale, "schemes-active-schemes")} }
                    span { class: "stat-card__value", "{active_count(&SCHEMES)}" }
                    span { class: "stat-card__hint", {t!(locale, "schemes-open-applications")} }
                }
                div { class: "stat-card tone--orange",
                    span { class: "stat-card__label", {t!(locale, "schemes-total-benefit")} }
                    span { class: "stat-card__value", "{TOTAL_BENEFIT_LABEL}" }
                    span { class: "stat-card__hint", {t!(locale, "schemes-max-benefit")} }
                }
                div { class: "stat-card tone--purple",
                    span { class: "stat-card__label", {t!(locale, "schemes-application-time")} }
                    span { class: "stat-card__value", "{PROCESSING_DAYS_LABEL}" }
                    span { class: "stat-card__hint", {t!(locale, "schemes-processing-days")} }
                }
            }

            div { class: "chip-row", role: "tablist",
                button {
                    class: chip_class(category().is_none()),
                    r#type: "button",
                    onclick: move |_| category.set(None),
                    {t!(locale, "schemes-all-categories")}
                }
                for choice in SchemeCategory::ALL {
                    button {
                        key: "{choice.label_key()}",
                        class: chip_class(category() == Some(choice)),
                        r#type: "button",
                        onclick: move |_| category.set(Some(choice)),
                        {locale.read().t(choice.label_key())}
                    }
                }
            }

            div { class: "scheme-list",
                for scheme in visible {
                    article { key: "{scheme.title.en}", class: "card scheme-card",
                        header { class: "scheme-card__header",
                            div {
                                h2 { class: "card__title", "{scheme.title.get(language)}" }
                                p { class: "card__description", "{scheme.description.get(language)}" }
                            }
                            div { class: "scheme-card__badges",
                                span { class: "badge", {locale.read().t(scheme.category.label_key())} }
                                if scheme.active {
                                    span { class: "badge badge--success", {t!(locale, "common-active")} }
                                } else {
                                    span { class: "badge badge--muted", {t!(locale, "schemes-inactive")} }
                                }
                            }
                        }

                        div { class: "scheme-card__amount", "💰 {scheme.amount.get(language)}" }

                        div { class: "scheme-card__section",
                            h3 { {t!(locale, "schemes-main-benefits")} }
                            ul {
                                for benefit in scheme.benefits.iter() {
                                    li { key: "{benefit.en}", "✓ {benefit.get(language)}" }
                                }
                            }
                        }

                        if expanded() == Some(scheme.title.en) {
                            div { class: "scheme-card__section",
                                h3 { {t!(locale, "schemes-required-documents")} }
                                ul {
                                    for document in scheme.documents.iter() {
                                        li { key: "{document.en}", "📄 {document.get(language)}" }
                                    }
                                }
                            }
                        }

                        dl { class: "scheme-card__facts",
                            div {
                                dt { {t!(locale, "schemes-eligibility")} }
                                dd { "{scheme.eligibility.get(language)}" }
                            }
                            div {
                                dt { {t!(locale, "schemes-deadline")} }
                                dd { "{scheme.deadline.get(language)}" }
                            }
                        }

                        div { class: "scheme-card__actions",
                            button {
                                class: "button button--primary",
                                r#type: "button",
                                disabled: !scheme.active,
                                {t!(locale, "schemes-apply-now")}
                            }
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                aria_expanded: expanded() == Some(scheme.title.en),
                                onclick: move |_| {
                                    let id = scheme.title.en;
                                    let next = if *expanded.peek() == Some(id) { None } else { Some(id) };
                                    expanded.set(next);
                                },
                                {t!(locale, "schemes-read-more")}
                            }
                        }
                    }
                }
            }

            article { class: "card help-card",
                h2 { class: "card__title", {t!(locale, "schemes-need-help")} }
                p { class: "card__description", {t!(locale, "schemes-help-description")} }
                div { class: "help-card__actions",
                    a { class: "button button--primary", href: HELPLINE, {t!(locale, "schemes-helpline")} }
                    button { class: "button button--ghost", r#type: "button", {t!(locale, "schemes-chat-support")} }
                    button { class: "button button--ghost", r#type: "button", {t!(locale, "schemes-find-office")} }
                    button { class: "button button--ghost", r#type: "button", {t!(locale, "schemes-download-guide")} }
                }
            }
        }
    }
}
