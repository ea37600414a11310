//! Entity extraction: price ceiling, year, powertrain, body type, region, model mentions.
//!
//! Every extractor is best-effort: an absent or malformed signal leaves the
//! corresponding filter unset.

use std::sync::LazyLock;

use regex::Regex;

use cm_catalog::Filters;

use super::synonyms::{
    BODY_TYPES, MODEL_FRAGMENTS, MODEL_REWRITES, POWERTRAINS, REGIONS, canonical,
    lookup_alias, lookup_by_includes,
};

// Tried in order against the separator-free text.
static PRICE_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:under|below|lessthan|<=|<)\$?(\d+)(k|grand)?").unwrap(),
        Regex::new(r"(?:max|atmost)\$?(\d+)(k|grand)?").unwrap(),
    ]
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").unwrap());

static MODEL_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = MODEL_FRAGMENTS.join("|");
    Regex::new(&format!(r"^({alternatives})(s|\d+)?$")).unwrap()
});

/// Collapse runs of whitespace and lower-case.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Extract all filter signals from normalized text.
pub fn extract(lower: &str) -> Filters {
    Filters {
        powertrain: lookup_by_includes(lower, POWERTRAINS).map(canonical),
        body_type: lookup_by_includes(lower, BODY_TYPES).map(canonical),
        max_price: extract_max_price(lower),
        region: lookup_alias(lower, REGIONS).map(String::from),
        year: extract_year(lower),
        drivetrain: None,
        models: extract_models(lower),
    }
}

/// Price ceiling from phrases like "under 30k", "below 40,000", "max $25 grand".
///
/// A zero ceiling is treated as no ceiling.
pub fn extract_max_price(lower: &str) -> Option<f64> {
    let compact: String = lower.chars().filter(|c| *c != ',' && *c != ' ').collect();
    let caps = PRICE_PATTERNS.iter().find_map(|re| re.captures(&compact))?;

    let amount: u64 = caps[1].parse().ok()?;
    let amount = if caps.get(2).is_some() {
        amount.checked_mul(1000)?
    } else {
        amount
    };
    (amount > 0).then_some(amount as f64)
}

/// First standalone `20xx` token.
pub fn extract_year(lower: &str) -> Option<u16> {
    YEAR.captures(lower)?[1].parse().ok()
}

/// Known model fragments mentioned in the text, in mention order.
///
/// A trailing plural `s` is dropped ("camrys" → "camry"); a numeric suffix
/// is kept ("gr86").
pub fn extract_models(lower: &str) -> Vec<String> {
    lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .filter_map(|word| {
            let caps = MODEL_TOKEN.captures(word)?;
            let fragment = &caps[1];
            let token = match caps.get(2).map(|m| m.as_str()) {
                Some("s") | None => fragment,
                Some(_) => word,
            };
            let rewritten = MODEL_REWRITES
                .iter()
                .find(|(from, _)| *from == token)
                .map_or(token, |(_, to)| *to);
            Some(rewritten.to_string())
        })
        .collect()
}
