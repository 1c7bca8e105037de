use dioxus::prelude::*;
use tracing::warn;

use crate::components::LanguageSwitcher;
use crate::context::{use_locale, use_session, use_toasts};
use crate::routes::{AuthMode, Route};
use crate::session::{Credentials, SignupRequest};
use crate::t;

/// Login and signup forms, selected by `?mode=`.
#[component]
pub fn Auth(mode: String) -> Element {
    let mode = AuthMode::from_query(&mode);
    let mut session = use_session();
    let locale = use_locale();
    let toaster = use_toasts();
    let nav = navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if session.read().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    let on_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if *loading.peek() {
            return;
        }
        loading.set(true);

        let credentials = match mode {
            AuthMode::Login => Credentials::login(email.peek().clone(), password.peek().clone()),
            AuthMode::Signup => Credentials::Signup(
                SignupRequest::new(
                    name.peek().clone(),
                    email.peek().clone(),
                    password.peek().clone(),
                )
                .with_phone(phone.peek().clone()),
            ),
        };
        let backend = session.peek().backend();
        let accepted = credentials
            .submit(backend.as_ref())
            .await
            .and_then(|outcome| session.write().accept(outcome));
        loading.set(false);

        match accepted {
            Ok(true) => {
                let (title, description) = match mode {
                    AuthMode::Login => (
                        t!(locale, "auth-login-success"),
                        t!(locale, "auth-welcome-message"),
                    ),
                    AuthMode::Signup => (
                        t!(locale, "auth-signup-success"),
                        t!(locale, "auth-account-created"),
                    ),
                };
                toaster.info(title, Some(description));
                nav.replace(Route::Dashboard {});
            }
            Ok(false) => {
                toaster.error(
                    t!(locale, "auth-error"),
                    Some(t!(locale, "auth-check-credentials")),
                );
            }
            Err(err) => {
                warn!(error = %err, mode = mode.query(), "authentication failed");
                toaster.error(
                    t!(locale, "auth-error"),
                    Some(t!(locale, "auth-something-wrong")),
                );
            }
        }
    };

    let (title, description, submit_label) = match mode {
        AuthMode::Login => (
            t!(locale, "auth-login-title"),
            t!(locale, "auth-login-description"),
            t!(locale, "auth-login-button"),
        ),
        AuthMode::Signup => (
            t!(locale, "auth-signup-title"),
            t!(locale, "auth-signup-description"),
            t!(locale, "auth-signup-button"),
        ),
    };
    let (switch_prompt, switch_link) = match mode {
        AuthMode::Login => (t!(locale, "auth-new-user"), t!(locale, "auth-register-here")),
        AuthMode::Signup => (t!(locale, "auth-existing-user"), t!(locale, "auth-login-here")),
    };
    let password_type = if show_password() { "text" } else { "password" };
    let password_autocomplete = match mode {
        AuthMode::Login => "current-password",
        AuthMode::Signup => "new-password",
    };
    let password_toggle_label = if show_password() {
        t!(locale, "auth-hide-password")
    } else {
        t!(locale, "auth-show-password")
    };

    rsx! {
        div { class: "auth",
            div { class: "auth__topbar",
                Link { class: "auth__brand", to: Route::Landing {},
                    span { aria_hidden: "true", "🌱" }
                    span { {t!(locale, "landing-title")} }
                }
                LanguageSwitcher {}
            }

            div { class: "card auth__card",
                h1 { class: "auth__title", "{title}" }
                p { class: "auth__description", "{description}" }

                form { class: "auth__form", onsubmit: on_submit,
                    if mode == AuthMode::Signup {
                        div { class: "field",
                            label { class: "field__label", r#for: "auth_name", {t!(locale, "auth-full-name")} }
                            input {
                                id: "auth_name",
                                class: "field__input",
                                r#type: "text",
                                autocomplete: "name",
                                placeholder: t!(locale, "auth-name-placeholder"),
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }
                    }

                    div { class: "field",
                        label { class: "field__label", r#for: "auth_email", {t!(locale, "auth-email")} }
                        input {
                            id: "auth_email",
                            class: "field__input",
                            r#type: "email",
                            autocomplete: "email",
                            placeholder: t!(locale, "auth-email-placeholder"),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    if mode == AuthMode::Signup {
                        div { class: "field",
                            label { class: "field__label", r#for: "auth_phone", {t!(locale, "auth-phone")} }
                            input {
                                id: "auth_phone",
                                class: "field__input",
                                r#type: "tel",
                                autocomplete: "tel",
                                placeholder: t!(locale, "auth-phone-placeholder"),
                                value: "{phone}",
                                oninput: move |evt| phone.set(evt.value()),
                            }
                        }
                    }

                    div { class: "field",
                        label { class: "field__label", r#for: "auth_password", {t!(locale, "auth-password")} }
                        div { class: "field__row",
                            input {
                                id: "auth_password",
                                class: "field__input",
                                r#type: password_type,
                                autocomplete: password_autocomplete,
                                placeholder: t!(locale, "auth-password-placeholder"),
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                class: "button button--ghost field__toggle",
                                r#type: "button",
                                aria_label: "{password_toggle_label}",
                                title: "{password_toggle_label}",
                                onclick: move |_| show_password.toggle(),
                                if show_password() { "🙈" } else { "👁" }
                            }
                        }
                    }

                    button {
                        class: "button button--primary auth__submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            {t!(locale, "auth-please-wait")}
                        } else {
                            "{submit_label}"
                        }
                    }
                }

                p { class: "auth__switch",
                    "{switch_prompt} "
                    Link { class: "auth__switch-link", to: mode.toggled().route(), "{switch_link}" }
                }
            }
        }
    }
}
