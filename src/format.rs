//! Number formatting shared by the cards, tooltips, axes and the CLI.

use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en, // default
    }
}

/// Integer with locale thousands separators, e.g. `1,338` or `1.338`.
pub fn grouped_count(n: usize, locale_tag: &str) -> String {
    (n as u64).to_formatted_string(map_locale(locale_tag))
}

/// `$13270.42`
pub fn dollars(v: f64) -> String {
    format!("${v:.2}")
}

/// Whole thousands for axis ticks: `$15k`.
pub fn dollars_k(v: f64) -> String {
    format!("${:.0}k", v / 1000.0)
}

/// One-decimal thousands for bar value labels: `$13.3k`.
pub fn dollars_k1(v: f64) -> String {
    format!("${:.1}k", v / 1000.0)
}

/// Up to `max_decimals` decimals with trailing zeros (and a trailing dot) trimmed.
/// Non-finite values render as `NA`.
pub fn trimmed(v: f64, max_decimals: usize) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let s = format!("{:.*}", max_decimals, v);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
