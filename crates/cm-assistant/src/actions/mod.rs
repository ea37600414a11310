//! Action dispatcher: routes a parsed command to its handler.
//!
//! Every branch terminates in a `Response`; nothing here returns an error.
//! The only side effect is the optional garage hook.

pub mod compare;
pub mod garage;
pub mod replies;
pub mod search;

use chrono::Timelike;

use cm_catalog::{Filters, Vehicle};

use crate::command::{Intent, ParsedCommand};
use crate::hooks::Hooks;
use crate::parser::{CommandParser, RuleBasedParser};
use crate::response::Response;

/// Parser + dispatcher, holding no per-request state.
pub struct Assistant {
    parser: Box<dyn CommandParser>,
    clock: fn() -> u32,
}

fn local_hour() -> u32 {
    chrono::Local::now().hour()
}

impl Assistant {
    pub fn new(parser: Box<dyn CommandParser>) -> Self {
        Self {
            parser,
            clock: local_hour,
        }
    }

    /// Override the local-hour source used for time-of-day greetings.
    pub fn with_clock(mut self, clock: fn() -> u32) -> Self {
        self.clock = clock;
        self
    }

    pub fn parser_name(&self) -> &str {
        self.parser.name()
    }

    /// Interpret `text` against `catalog` and produce one response.
    pub fn handle(&self, text: &str, catalog: &[Vehicle], hooks: Hooks<'_>) -> Response {
        let parsed = self.parser.parse(text);
        tracing::debug!(
            parser = self.parser.name(),
            intent = %parsed.intent,
            "command parsed"
        );
        self.dispatch(&parsed, catalog, hooks)
    }

    /// Resolve an already-parsed command.
    pub fn dispatch(&self, parsed: &ParsedCommand, catalog: &[Vehicle], hooks: Hooks<'_>) -> Response {
        let filters = &parsed.filters;
        let response = match parsed.intent {
            Intent::Help => replies::help(),
            Intent::Chitchat(kind) => replies::chitchat(kind, (self.clock)()),
            Intent::Compare => compare::compare(catalog, filters),
            Intent::AddToGarage => garage::add_to_garage(catalog, filters, hooks),
            Intent::Recommend => search::recommend(catalog, filters),
            Intent::Search => search::search(filters),
        };
        tracing::debug!(intent = %parsed.intent, kind = response.kind(), "command resolved");
        response
    }

    /// Filter the catalog directly and return up to three matches.
    ///
    /// No intent routes here; callers use it to resolve `Response::Search`
    /// directives.
    pub fn browse(&self, catalog: &[Vehicle], filters: &Filters) -> Response {
        search::browse(catalog, filters)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(Box::new(RuleBasedParser::new()))
    }
}

/// Interpret `text` with the rule-based assistant.
pub fn respond(text: &str, catalog: &[Vehicle], hooks: Hooks<'_>) -> Response {
    Assistant::default().handle(text, catalog, hooks)
}
