//! Command parsing: entity extraction followed by intent classification.
//!
//! The `CommandParser` trait is the seam between text understanding and
//! dispatch; `RuleBasedParser` is the deterministic, table-driven tier.

pub mod chitchat;
pub mod entities;
pub mod intent;
pub mod synonyms;

use crate::command::{Intent, ParsedCommand};

/// Trait for engines that turn free-form text into a `ParsedCommand`.
pub trait CommandParser: Send + Sync {
    /// Parse text. Never fails: unrecognized input becomes small talk.
    fn parse(&self, text: &str) -> ParsedCommand;

    /// Name of this parser (for logging).
    fn name(&self) -> &str;
}

/// Synonym-table and keyword-rule parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedParser;

impl RuleBasedParser {
    pub fn new() -> Self {
        Self
    }
}

impl CommandParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ParsedCommand {
        parse_command(text)
    }

    fn name(&self) -> &str {
        "rules"
    }
}

/// Core parsing logic.
fn parse_command(text: &str) -> ParsedCommand {
    let lower = entities::normalize(text);
    let filters = entities::extract(&lower);

    // No catalog signal at all: small talk, regardless of keyword rules.
    let intent = if filters.has_any_signal() {
        intent::classify(&lower)
    } else {
        Intent::Chitchat(chitchat::classify(&lower))
    };

    ParsedCommand::new(intent, filters)
}
