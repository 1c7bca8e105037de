use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures Hindi provides exactly the keys present in the reference (en)
/// `kisan-sarthi-ui.ftl`, so no page falls back to showing a raw key.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<tag>/kisan-sarthi-ui.ftl`
/// 2. Copy all keys from `en/kisan-sarthi-ui.ftl`
/// 3. Register it below and run `cargo test -p kisansarthi-ui`.
#[test]
fn all_locales_have_all_reference_keys() {
    const EN: &str = include_str!("../i18n/en/kisan-sarthi-ui.ftl");
    const HI: &str = include_str!("../i18n/hi/kisan-sarthi-ui.ftl");

    let reference_keys = extract_keys(EN);

    assert!(!reference_keys.is_empty(), "Reference (en) contains no keys.");
    assert_no_dup_keys(EN, "en");

    let locales: &[(&str, &str)] = &[
        ("hi", HI),
        // Add new locales here.
    ];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<_> = reference_keys.difference(&keys).cloned().collect();
        let extra: BTreeSet<_> = keys.difference(&reference_keys).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) absent from en:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_message_is_left_blank() {
    const EN: &str = include_str!("../i18n/en/kisan-sarthi-ui.ftl");
    const HI: &str = include_str!("../i18n/hi/kisan-sarthi-ui.ftl");

    for (locale, src) in [("en", EN), ("hi", HI)] {
        for line in src.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                assert!(
                    !value.trim().is_empty(),
                    "{locale}: message `{}` has an empty value",
                    key.trim()
                );
            }
        }
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_id(key) {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

fn is_message_id(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@')
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if is_message_id(key) && !seen.insert(key.to_string()) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
