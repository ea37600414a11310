//! Immutable catalog snapshot with lookup, pagination, and simple queries.

use serde::Serialize;

use crate::vehicle::Vehicle;

/// An ordered, read-only catalog snapshot.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
}

/// A resolved pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: usize,
    pub limit: usize,
}

impl Page {
    /// Resolve raw `limit` / `page` / `offset` query values.
    ///
    /// Returns `None` (no pagination) unless `limit` parses to a positive
    /// integer. `offset` takes precedence over `page`; an unparseable or
    /// negative offset, or a page below 1, starts at 0.
    pub fn from_query(limit: Option<&str>, page: Option<&str>, offset: Option<&str>) -> Option<Self> {
        let limit = limit?.trim().parse::<i64>().ok().filter(|l| *l > 0)? as usize;

        let start = if let Some(offset) = offset {
            offset
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|o| *o >= 0)
                .map_or(0, |o| o as usize)
        } else if let Some(page) = page {
            page.trim()
                .parse::<i64>()
                .ok()
                .filter(|p| *p > 0)
                .map_or(0, |p| (p as usize - 1).saturating_mul(limit))
        } else {
            0
        };

        Some(Self { start, limit })
    }
}

/// Compact description of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSummary {
    pub model: String,
    pub powertrain: String,
    pub drivetrain: String,
    pub msrp: f64,
    pub currency: String,
}

/// A selectable drivetrain/powertrain option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrivetrainOption {
    pub label: String,
    pub value: String,
}

impl Catalog {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Look up a vehicle by identifier.
    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Slice the catalog by an optional page window.
    pub fn paginate(&self, page: Option<Page>) -> &[Vehicle] {
        match page {
            Some(Page { start, limit }) => {
                let start = start.min(self.vehicles.len());
                let end = start.saturating_add(limit).min(self.vehicles.len());
                &self.vehicles[start..end]
            }
            None => &self.vehicles,
        }
    }

    /// Region / year equality filter, preserving catalog order.
    pub fn filter_by(&self, region: Option<&str>, year: Option<u16>) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| region.is_none_or(|r| v.region == r))
            .filter(|v| year.is_none_or(|y| v.year == y))
            .collect()
    }

    pub fn summary(&self, id: &str) -> Option<VehicleSummary> {
        self.find(id).map(|v| VehicleSummary {
            model: format!("{} {} ({})", v.name, v.trim, v.year),
            powertrain: v.powertrain.clone(),
            drivetrain: v.drivetrain.clone(),
            msrp: v.msrp,
            currency: v.currency.clone(),
        })
    }

    /// Distinct non-empty powertrain and drivetrain values of one vehicle.
    pub fn drivetrain_options(&self, id: &str) -> Option<Vec<DrivetrainOption>> {
        let v = self.find(id)?;
        let mut options: Vec<DrivetrainOption> = Vec::new();
        for value in [&v.powertrain, &v.drivetrain] {
            if !value.is_empty() && !options.iter().any(|o| &o.value == value) {
                options.push(DrivetrainOption {
                    label: value.clone(),
                    value: value.clone(),
                });
            }
        }
        Some(options)
    }
}

impl From<Vec<Vehicle>> for Catalog {
    fn from(vehicles: Vec<Vehicle>) -> Self {
        Self::new(vehicles)
    }
}
