//! Small-talk detection for text that carries no catalog signal.

use std::sync::LazyLock;

use regex::Regex;

use crate::command::ChitchatKind;

struct ChitchatPattern {
    kind: ChitchatKind,
    regex: Regex,
}

impl ChitchatPattern {
    fn new(kind: ChitchatKind, pattern: &str) -> Self {
        Self {
            kind,
            regex: Regex::new(pattern).unwrap(),
        }
    }
}

// Priority order: first match wins.
static CHITCHAT_PATTERNS: LazyLock<Vec<ChitchatPattern>> = LazyLock::new(|| {
    vec![
        ChitchatPattern::new(
            ChitchatKind::Greeting,
            r"\b(hi|hello|hey|yo|sup|good (morning|afternoon|evening))\b",
        ),
        ChitchatPattern::new(
            ChitchatKind::Thanks,
            r"\b(thanks|thank you|ty|thx|appreciate)\b",
        ),
        ChitchatPattern::new(
            ChitchatKind::Farewell,
            r"\b(bye|goodbye|see (ya|you)|later|cya)\b",
        ),
        ChitchatPattern::new(
            ChitchatKind::Affirmation,
            r"\b(yes|yep|yeah|sure|ok|okay|sounds good|go ahead)\b",
        ),
        ChitchatPattern::new(ChitchatKind::Negative, r"\b(no|nope|nah|not now)\b"),
        ChitchatPattern::new(
            ChitchatKind::HowAreYou,
            r"(how are you|how's it going|how are u)",
        ),
        ChitchatPattern::new(ChitchatKind::WhoAreYou, r"(who are you|what are you)"),
    ]
});

/// Classify lower-cased text into a small-talk category.
pub fn classify(lower: &str) -> ChitchatKind {
    CHITCHAT_PATTERNS
        .iter()
        .find(|p| p.regex.is_match(lower))
        .map_or(ChitchatKind::Generic, |p| p.kind)
}
