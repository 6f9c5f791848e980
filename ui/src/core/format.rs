//! Formatting helpers for presenting metrics.

/// `12000.0` → `"12.0k hrs"`.
pub fn format_watch_hours_k(hours: f64) -> String {
    format!("{:.1}k hrs", hours / 1000.0)
}

pub fn format_minutes(minutes: i64) -> String {
    format!("{minutes} min")
}

pub fn format_percent(percent: i64) -> String {
    format!("{percent}%")
}

/// Fraction in [0, 1] shown as a whole percentage (`0.62` → `"62%"`).
pub fn format_fraction_percent(fraction: f64) -> String {
    format_percent((fraction * 100.0).round() as i64)
}

/// Plain number for axis ticks and tooltips: integers without a decimal point,
/// everything else with at most two decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Digit grouping in threes, e.g. `format_grouped(48000, ",")` → `"48,000"`.
pub fn format_grouped(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Thousands separator for a language tag such as `en-US` or `fr-FR`.
pub fn group_separator(language: &str) -> &'static str {
    let primary = language.split(['-', '_']).next().unwrap_or_default();
    match primary.to_ascii_lowercase().as_str() {
        "es" | "de" | "it" | "pt" | "nl" => ".",
        "fr" => "\u{202f}",
        _ => ",",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_hours_use_one_decimal() {
        assert_eq!(format_watch_hours_k(12_000.0), "12.0k hrs");
        assert_eq!(format_watch_hours_k(1_340.0), "1.3k hrs");
        assert_eq!(format_watch_hours_k(980.0), "1.0k hrs");
    }

    #[test]
    fn grouping_inserts_separator_every_three_digits() {
        assert_eq!(format_grouped(48_000, ","), "48,000");
        assert_eq!(format_grouped(999, ","), "999");
        assert_eq!(format_grouped(1_234_567, "."), "1.234.567");
        assert_eq!(format_grouped(0, ","), "0");
    }

    #[test]
    fn separator_follows_language() {
        assert_eq!(group_separator("en-US"), ",");
        assert_eq!(group_separator("es-ES"), ".");
        assert_eq!(group_separator("fr-FR"), "\u{202f}");
        assert_eq!(group_separator(""), ",");
    }

    #[test]
    fn minute_and_percent_suffixes() {
        assert_eq!(format_minutes(45), "45 min");
        assert_eq!(format_percent(69), "69%");
        assert_eq!(format_fraction_percent(0.62), "62%");
        assert_eq!(format_fraction_percent(0.0), "0%");
        assert_eq!(format_fraction_percent(1.0), "100%");
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(2200.0), "2200");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.25), "0.25");
    }
}
