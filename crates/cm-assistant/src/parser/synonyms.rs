//! Ordered synonym and alias tables.
//!
//! Declaration order is the match precedence: the first key with any
//! trigger contained in the text wins.

/// Powertrain key → trigger substrings.
pub const POWERTRAINS: &[(&str, &[&str])] = &[
    ("hybrid", &["hybrid", "dual engine"]),
    ("plug-in hybrid", &["plug-in", "plugin hybrid", "phev"]),
    ("electric", &["electric", "ev", "battery"]),
    ("gas", &["gas", "petrol", "gasoline"]),
    ("hydrogen", &["hydrogen", "fuel cell"]),
];

/// Body-type key → trigger substrings.
pub const BODY_TYPES: &[(&str, &[&str])] = &[
    (
        "suv",
        &["suv", "crossover", "family car", "family-friendly", "family"],
    ),
    ("sedan", &["sedan", "saloon", "compact car"]),
    ("truck", &["truck", "pickup"]),
    ("crossover", &["crossover"]),
    ("minivan", &["minivan", "van"]),
];

/// Region alias → catalog region tag.
pub const REGIONS: &[(&str, &str)] = &[
    ("us", "US"),
    ("usa", "US"),
    ("america", "US"),
    ("canada", "Canada"),
    ("ca", "Canada"),
    ("eu", "EU"),
    ("europe", "EU"),
    ("germany", "EU"),
    ("france", "EU"),
    ("italy", "EU"),
];

/// Known model-name fragments.
pub const MODEL_FRAGMENTS: &[&str] = &[
    "rav4",
    "corolla",
    "camry",
    "prius",
    "highlander",
    "tundra",
    "tacoma",
    "sienna",
    "supra",
    "crown",
    "land",
    "4runner",
    "bz4x",
    "gr",
    "cross",
];

/// Fragments that expand to a longer model name.
pub const MODEL_REWRITES: &[(&str, &str)] = &[("land", "land cruiser")];

/// First key in `table` whose triggers include a substring of `text`.
pub fn lookup_by_includes<'a>(text: &str, table: &[(&'a str, &[&str])]) -> Option<&'a str> {
    table
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| text.contains(*t)))
        .map(|(key, _)| *key)
}

/// First alias in `table` contained in `text`, mapped to its value.
pub fn lookup_alias<'a>(text: &str, table: &[(&str, &'a str)]) -> Option<&'a str> {
    table
        .iter()
        .find(|(alias, _)| text.contains(*alias))
        .map(|(_, value)| *value)
}

/// Canonical display form of a synonym key.
pub fn canonical(key: &str) -> String {
    match key {
        "plug-in hybrid" => "Plug-in Hybrid".to_string(),
        "suv" => "SUV".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declared_key_wins() {
        // "plug-in hybrid" text also contains "hybrid", which is declared first.
        assert_eq!(lookup_by_includes("plug-in hybrid", POWERTRAINS), Some("hybrid"));
        assert_eq!(lookup_by_includes("a phev please", POWERTRAINS), Some("plug-in hybrid"));
    }

    #[test]
    fn crossover_maps_to_suv() {
        assert_eq!(lookup_by_includes("a crossover", BODY_TYPES), Some("suv"));
    }

    #[test]
    fn no_trigger_no_key() {
        assert_eq!(lookup_by_includes("a blue one", POWERTRAINS), None);
    }

    #[test]
    fn region_alias_order() {
        assert_eq!(lookup_alias("in canada", REGIONS), Some("Canada"));
        assert_eq!(lookup_alias("in germany", REGIONS), Some("EU"));
        assert_eq!(lookup_alias("made in italy", REGIONS), Some("EU"));
        assert_eq!(lookup_alias("nothing here", REGIONS), None);
    }

    #[test]
    fn canonical_forms() {
        assert_eq!(canonical("plug-in hybrid"), "Plug-in Hybrid");
        assert_eq!(canonical("suv"), "SUV");
        assert_eq!(canonical("sedan"), "Sedan");
        assert_eq!(canonical("hydrogen"), "Hydrogen");
        assert_eq!(canonical(""), "");
    }
}
