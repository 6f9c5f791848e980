use std::collections::BTreeMap;

/// Locale parity check: every locale defines exactly the fallback's message IDs,
/// each with a non-empty value, and none twice.
const EN_US: &str = include_str!("../i18n/en-US/reelstats-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/reelstats-ui.ftl");
const FR_FR: &str = include_str!("../i18n/fr-FR/reelstats-ui.ftl");

/// Message id → value for single-line Fluent messages. Panics on duplicates.
fn messages(locale: &str, src: &str) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for (line_no, line) in src.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('.') {
            continue;
        }
        let Some((id, value)) = trimmed.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), value.trim().to_string());
        assert!(
            previous.is_none(),
            "{locale}: duplicate message `{id}` at line {}",
            line_no + 1
        );
    }
    out
}

#[test]
fn locales_match_fallback_ids() {
    let fallback = messages("en-US", EN_US);
    assert!(!fallback.is_empty(), "fallback (en-US) contains no messages");

    let mut report = Vec::new();
    for (locale, src) in [("es-ES", ES_ES), ("fr-FR", FR_FR)] {
        let translated = messages(locale, src);
        let missing: Vec<_> = fallback
            .keys()
            .filter(|k| !translated.contains_key(*k))
            .cloned()
            .collect();
        let extra: Vec<_> = translated
            .keys()
            .filter(|k| !fallback.contains_key(*k))
            .cloned()
            .collect();
        if !missing.is_empty() {
            report.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            report.push(format!("{locale} unknown: {}", extra.join(", ")));
        }
    }

    assert!(report.is_empty(), "locale parity failed:\n{}", report.join("\n"));
}

#[test]
fn no_empty_values() {
    for (locale, src) in [("en-US", EN_US), ("es-ES", ES_ES), ("fr-FR", FR_FR)] {
        for (id, value) in messages(locale, src) {
            assert!(!value.is_empty(), "{locale}: `{id}` has an empty value");
        }
    }
}

#[test]
fn footnote_copy_is_verbatim_in_fallback() {
    let fallback = messages("en-US", EN_US);
    assert_eq!(fallback["footnote-lead"], "You selected");
    assert_eq!(
        fallback["footnote-tail"],
        "— imagine drilling into retention, completion, and cohort trends for this title."
    );
}
