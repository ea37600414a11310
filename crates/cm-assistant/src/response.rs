//! The single response type handed back to the UI layer.

use serde::{Deserialize, Serialize};

use cm_catalog::{Filters, Vehicle};

/// Exactly one of these is produced per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Plain answer, clarification, or failure guidance.
    Text { message: String },
    /// A message plus an ordered vehicle list.
    Cars { message: String, cars: Vec<Vehicle> },
    /// A directive for the caller to run a structured catalog query.
    Search { message: String, filters: Filters },
}

impl Response {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text {
            message: message.into(),
        }
    }

    pub fn cars(message: impl Into<String>, cars: Vec<Vehicle>) -> Self {
        Self::Cars {
            message: message.into(),
            cars,
        }
    }

    pub fn search(message: impl Into<String>, filters: Filters) -> Self {
        Self::Search {
            message: message.into(),
            filters,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Cars { .. } => "cars",
            Self::Search { .. } => "search",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Text { message } | Self::Cars { message, .. } | Self::Search { message, .. } => {
                message
            }
        }
    }

    /// Vehicles carried by a `Cars` response (empty otherwise).
    pub fn vehicles(&self) -> &[Vehicle] {
        match self {
            Self::Cars { cars, .. } => cars,
            _ => &[],
        }
    }
}
