//! Catalog filter: applies a structured filter set and imposes the canonical order.

use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// Optional constraints derived from user text (or supplied directly by a caller).
///
/// Every field is optional; `None` / empty means "unconstrained".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powertrain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    /// Never extracted from text; only set by explicit callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drivetrain: Option<String>,
    /// Lower-case model-name tokens in mention order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub models: Vec<String>,
}

impl Filters {
    /// Price, region, or year constraint present.
    pub fn has_strong(&self) -> bool {
        self.max_price.is_some() || self.region.is_some() || self.year.is_some()
    }

    /// Powertrain or body-type constraint present.
    pub fn has_soft(&self) -> bool {
        self.powertrain.is_some() || self.body_type.is_some()
    }

    /// True if any text-derived signal was found (drivetrain excluded).
    pub fn has_any_signal(&self) -> bool {
        self.has_strong() || self.has_soft() || !self.models.is_empty()
    }
}

/// Filter `catalog` by every present field, then sort by in-stock count
/// (descending) with ties broken by price (ascending).
///
/// Filters are applied in a fixed order: region, body type, powertrain,
/// drivetrain, year, max price. The sort is stable.
pub fn apply_filters(catalog: &[Vehicle], filters: &Filters) -> Vec<Vehicle> {
    let mut list: Vec<Vehicle> = catalog
        .iter()
        .filter(|v| filters.region.as_ref().is_none_or(|r| &v.region == r))
        .filter(|v| filters.body_type.as_ref().is_none_or(|b| &v.series == b))
        .filter(|v| filters.powertrain.as_ref().is_none_or(|p| &v.powertrain == p))
        .filter(|v| filters.drivetrain.as_ref().is_none_or(|d| &v.drivetrain == d))
        .filter(|v| filters.year.is_none_or(|y| v.year == y))
        .filter(|v| filters.max_price.is_none_or(|max| v.msrp <= max))
        .cloned()
        .collect();

    list.sort_by(|a, b| {
        b.inventory
            .in_stock
            .cmp(&a.inventory.in_stock)
            .then_with(|| a.msrp.total_cmp(&b.msrp))
    });

    tracing::trace!(
        input = catalog.len(),
        matched = list.len(),
        "catalog filter applied"
    );
    list
}
