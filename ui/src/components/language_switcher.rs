use dioxus::prelude::*;
use tracing::warn;

use crate::context::use_locale;
use crate::i18n::Locale;
use crate::t;

/// Language picker. Changing it re-renders every page through the locale signal
/// and persists the choice.
#[component]
pub fn LanguageSwitcher() -> Element {
    let mut locale = use_locale();
    let current = locale.read().language();

    let on_change = move |evt: FormEvent| {
        let value = evt.value();
        let Some(next) = Locale::from_tag(&value) else {
            warn!(tag = %value, "ignoring unknown language");
            return;
        };
        if let Err(err) = locale.write().set_language(next) {
            warn!(error = %err, "could not persist language preference");
        }
    };

    rsx! {
        div { class: "locale-switcher",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!(locale, "nav-language-label")}
            }
            select {
                id: "locale-select",
                class: "locale-switcher__select",
                value: "{current.tag()}",
                onchange: on_change,
                for choice in Locale::ALL {
                    option {
                        key: "{choice.tag()}",
                        value: "{choice.tag()}",
                        selected: choice == current,
                        "{choice.native_name()}"
                    }
                }
            }
        }
    }
}
