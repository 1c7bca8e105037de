use dioxus::prelude::*;

use crate::context::{use_app_config, use_locale};
use crate::core::timing;
use crate::data::experts::{ChatLog, Sender, CONSULTATIONS, EXPERTS};
use crate::t;

fn stars(rating: u8) -> String {
    "★".repeat(usize::from(rating.min(5)))
}

fn availability_class(available: bool) -> &'static str {
    if available {
        "badge badge--success"
    } else {
        "badge badge--muted"
    }
}

fn message_class(sender: Sender) -> &'static str {
    match sender {
        Sender::Farmer => "chat__message chat__message--farmer",
        Sender::Expert => "chat__message chat__message--expert",
    }
}

#[component]
pub fn Expert() -> Element {
    let locale = use_locale();
    let config = use_app_config();
    let language = locale.read().language();

    let mut chat = use_signal(ChatLog::new);
    let mut draft = use_signal(String::new);
    let mut selected = use_signal(|| Option::<usize>::None);

    let reply_delay = config.expert_reply_delay;
    let on_send = move |_| async move {
        let question = draft.peek().clone();
        if chat.write().push_question(&question).is_none() {
            return;
        }
        draft.set(String::new());
        let reply = t!(locale, "expert-auto-reply");
        timing::sleep(reply_delay).await;
        chat.write().push_reply(reply);
    };

    let chatting_with = selected().and_then(|index| EXPERTS.get(index));
    let messages = chat.read().messages().to_vec();

    rsx! {
        section { class: "page page-expert",
            header { class: "page__header",
                h1 { class: "page__title", {t!(locale, "expert-title")} }
                p { class: "page__description", {t!(locale, "expert-description")} }
            }

            article { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", {t!(locale, "expert-available-experts")} }
                    p { class: "card__description", {t!(locale, "expert-choose-expert")} }
                }
                div { class: "expert-list",
                    for (index, expert) in EXPERTS.iter().enumerate() {
                        div { key: "{expert.name.en}", class: "expert-card",
                            span { class: "expert-card__avatar", aria_hidden: "true", "{expert.initials()}" }
                            div { class: "expert-card__body",
                                h3 { class: "expert-card__name", "{expert.name.get(language)}" }
                                p { class: "expert-card__specialization", "{expert.specialization.get(language)}" }
                                p { class: "expert-card__meta",
                                    {t!(locale, "expert-experience")}
                                    ": {expert.experience.get(language)} · ⭐ {expert.rating} · 📍 {expert.location.get(language)}"
                                }
                                p { class: "expert-card__languages",
                                    {expert.languages.iter().map(|lang| lang.get(language)).collect::<Vec<_>>().join(", ")}
                                }
                            }
                            div { class: "expert-card__actions",
                                span {
                                    class: availability_class(expert.is_available()),
                                    {locale.read().t(expert.availability.label_key())}
                                }
                                button {
                                    class: "button button--ghost",
                                    r#type: "button",
                                    onclick: move |_| selected.set(Some(index)),
                                    "💬 "
                                    {t!(locale, "expert-chat")}
                                }
                                button {
                                    class: "button button--primary",
                                    r#type: "button",
                                    disabled: !expert.is_available(),
                                    "📞 "
                                    {t!(locale, "expert-call")}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "two-column",
                article { class: "card chat",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "expert-quick-question")} }
                        p { class: "card__description", {t!(locale, "expert-question-description")} }
                        if let Some(expert) = chatting_with {
                            p { class: "chat__partner",
                                {t!(locale, "expert-label")}
                                ": {expert.name.get(language)}"
                            }
                        }
                    }
                    if !messages.is_empty() {
                        ol { class: "chat__log",
                            for message in messages.iter() {
                                li {
                                    key: "{message.id}",
                                    class: message_class(message.sender),
                                    "{message.body}"
                                }
                            }
                        }
                    }
                    textarea {
                        class: "field__input chat__input",
                        rows: "4",
                        placeholder: t!(locale, "expert-question-placeholder"),
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        disabled: draft.read().trim().is_empty(),
                        onclick: on_send,
                        {t!(locale, "expert-send-question")}
                    }
                }

                article { class: "card",
                    header { class: "card__header",
                        h2 { class: "card__title", {t!(locale, "expert-your-sessions")} }
                    }
                    ul { class: "session-list",
                        for session in CONSULTATIONS.iter() {
                            li { key: "{session.topic.en}", class: "session-list__item",
                                div {
                                    h3 { class: "session-list__topic", "{session.topic.get(language)}" }
                                    p { class: "session-list__expert", "{session.expert.get(language)} · {session.date.get(language)}" }
                                }
                                div { class: "session-list__status",
                                    span { class: "badge", {locale.read().t(session.status.label_key())} }
                                    if let Some(rating) = session.rating {
                                        span { class: "session-list__rating", aria_label: "{rating}/5", "{stars(rating)}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "booking",
                        h3 { class: "booking__title", {t!(locale, "expert-book-consultation")} }
                        div { class: "booking__options",
                            button { class: "button button--ghost", r#type: "button", "🎥 " {t!(locale, "expert-video-call")} }
                            button { class: "button button--ghost", r#type: "button", "📞 " {t!(locale, "expert-phone-call")} }
                        }
                        p { class: "booking__slot",
                            {t!(locale, "expert-next-available")}
                            ": "
                            strong { {t!(locale, "expert-next-slot")} }
                        }
                        button { class: "button button--primary", r#type: "button", {t!(locale, "expert-book-now")} }
                    }
                }
            }
        }
    }
}
