#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared pages rely on stay present in the theme
  at ui/assets/theme/main.css.
- Fail fast if a refactor drops or renames a class used by a component,
  instead of shipping an unstyled page in packaged desktop builds.

How it works:
- The theme is embedded with `include_str!` (same path as `desktop/src/main.rs`).
- Each listed selector must appear verbatim.
- To rename or remove a selector, update the component markup first, then this list.

A substring check is enough as an early warning and keeps the test dependency free.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens that must exist in the shared theme.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-shell",
    ".visually-hidden",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    ".badge--success",
    ".chip--active",
    // Cards & stats
    ".card {",
    ".card__title",
    ".stat-card__value",
    ".tone--green",
    ".tone--blue",
    ".tone--orange",
    ".tone--purple",
    ".tone--yellow",
    ".trend--up",
    ".trend--down",
    // Landing & auth
    ".landing__hero",
    ".landing__cta",
    ".auth__card",
    ".auth__form",
    ".field__input",
    // Weather
    ".weather-current__details",
    ".forecast__day",
    ".priority--urgent",
    ".alert__title",
    // Market & schemes
    ".toolbar__search",
    ".crop-card__price",
    ".scheme-card__actions",
    // Expert
    ".expert-card__avatar",
    ".chat__message--farmer",
    ".chat__message--expert",
    ".session-list__rating",
    // Toasts
    ".toast--info",
    ".toast--error",
    ".toast__dismiss",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 640px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn toast_block_consistency() {
    let has_title = THEME_CSS.contains(".toast__title");
    let has_description = THEME_CSS.contains(".toast__description");
    assert!(
        has_title && has_description,
        "Toast sub-selectors missing (title: {has_title}, description: {has_description})"
    );
}
