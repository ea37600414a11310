//! Carmate assistant: natural-language commands over a vehicle catalog.
//!
//! Converts shopper text ("hybrid suvs under 30k", "compare camry and corolla")
//! into a typed `ParsedCommand` and resolves it against a catalog snapshot,
//! producing exactly one `Response` per call.
//!
//! Pipeline:
//! - **Parser** (`parser`): entity extraction + rule-cascade intent classification.
//! - **Dispatcher** (`actions`): per-intent handlers backed by the catalog
//!   filter and the recommendation scorer.
//!
//! The pipeline is synchronous and never fails; every unhappy path is a
//! `Response::Text` with a guiding message.

pub mod actions;
pub mod command;
pub mod format;
pub mod hooks;
pub mod parser;
pub mod recommend;
pub mod response;

pub use actions::{Assistant, respond};
pub use command::{ChitchatKind, Intent, ParsedCommand};
pub use hooks::{GarageHook, Hooks};
pub use parser::{CommandParser, RuleBasedParser};
pub use response::Response;

pub use cm_catalog::{Filters, Vehicle};
