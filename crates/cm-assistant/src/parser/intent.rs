//! Intent classification: a flat, ordered decision list.
//!
//! Every rule is tested; the last matching rule wins. Rule order is the
//! precedence and must not be collapsed into independent flags.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::Intent;

enum Matcher {
    Regex(Regex),
    Contains(&'static str),
}

impl Matcher {
    fn is_match(&self, lower: &str) -> bool {
        match self {
            Self::Regex(re) => re.is_match(lower),
            Self::Contains(needle) => lower.contains(*needle),
        }
    }
}

struct IntentRule {
    name: &'static str,
    intent: Intent,
    matcher: Matcher,
}

impl IntentRule {
    fn regex(name: &'static str, intent: Intent, pattern: &str) -> Self {
        Self {
            name,
            intent,
            matcher: Matcher::Regex(Regex::new(pattern).unwrap()),
        }
    }

    fn contains(name: &'static str, intent: Intent, needle: &'static str) -> Self {
        Self {
            name,
            intent,
            matcher: Matcher::Contains(needle),
        }
    }
}

static INTENT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        IntentRule::regex("compare", Intent::Compare, r"\bcompare\b|\bvs\b"),
        IntentRule::regex("help", Intent::Help, r"\bhelp\b|what can you do"),
        IntentRule::contains("recommend", Intent::Recommend, "recommend"),
        IntentRule::regex("add_to_garage", Intent::AddToGarage, r"(add|save).*(garage)"),
        // Re-applied so the literal help phrases override the action map.
        IntentRule::regex("help_phrase", Intent::Help, r"\bhelp\b|\bwhat can you do\b"),
    ]
});

/// Classify lower-cased text. Defaults to `Search`.
pub fn classify(lower: &str) -> Intent {
    let mut intent = Intent::Search;
    for rule in INTENT_RULES.iter() {
        if rule.matcher.is_match(lower) {
            tracing::trace!(rule = rule.name, "intent rule matched");
            intent = rule.intent;
        }
    }
    intent
}
