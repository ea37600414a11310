use serde::{Deserialize, Serialize};

use cm_catalog::Filters;

/// Sub-category of small talk, used when no catalog signal was found.
///
/// Variant order is the detection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChitchatKind {
    Greeting,
    Thanks,
    Farewell,
    Affirmation,
    Negative,
    HowAreYou,
    WhoAreYou,
    #[default]
    Generic,
}

impl ChitchatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Farewell => "farewell",
            Self::Affirmation => "affirmation",
            Self::Negative => "negative",
            Self::HowAreYou => "howareyou",
            Self::WhoAreYou => "whoareyou",
            Self::Generic => "generic",
        }
    }
}

/// Top-level action classified from user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "action", content = "chitchat", rename_all = "snake_case")]
pub enum Intent {
    #[default]
    Search,
    Compare,
    Recommend,
    AddToGarage,
    Help,
    Chitchat(ChitchatKind),
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Compare => "compare",
            Self::Recommend => "recommend",
            Self::AddToGarage => "add_to_garage",
            Self::Help => "help",
            Self::Chitchat(_) => "chitchat",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chitchat(kind) => write!(f, "chitchat/{}", kind.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Output of extraction + classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParsedCommand {
    #[serde(flatten)]
    pub intent: Intent,
    #[serde(default)]
    pub filters: Filters,
}

impl ParsedCommand {
    pub fn new(intent: Intent, filters: Filters) -> Self {
        Self { intent, filters }
    }

    /// The chitchat sub-type, if this command was classified as small talk.
    pub fn chitchat(&self) -> Option<ChitchatKind> {
        match self.intent {
            Intent::Chitchat(kind) => Some(kind),
            _ => None,
        }
    }
}
