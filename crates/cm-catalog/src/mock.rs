//! Mock catalog source for testing and development: serves in-memory vehicles.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::source::{CatalogSource, parse_catalog};
use crate::vehicle::Vehicle;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// The bundled 15-vehicle sample catalog.
pub fn sample_catalog() -> Vec<Vehicle> {
    parse_catalog("bundled", BUNDLED_CATALOG).expect("bundled catalog is valid JSON")
}

/// A catalog source that serves a pre-loaded vehicle list.
pub struct MockCatalogSource {
    vehicles: Vec<Vehicle>,
}

impl MockCatalogSource {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// An empty catalog.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A mock serving the bundled sample catalog.
    pub fn with_sample() -> Self {
        Self::new(sample_catalog())
    }

    /// Append a vehicle.
    pub fn push(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn load(&self) -> CatalogResult<Vec<Vehicle>> {
        Ok(self.vehicles.clone())
    }

    fn describe(&self) -> String {
        format!("mock:{} vehicles", self.vehicles.len())
    }
}
