//! Shared application state for the Axum server.

use std::sync::Arc;

use cm_assistant::Assistant;
use cm_catalog::{Catalog, CatalogResult, CatalogSource, sample_catalog};

use crate::garage::GarageStore;

/// Shared application state, cheap to clone into each handler.
#[derive(Clone)]
pub struct AppState {
    /// Immutable catalog snapshot loaded at startup.
    pub catalog: Arc<Catalog>,
    /// Command interpreter.
    pub assistant: Arc<Assistant>,
    /// Per-session saved vehicles.
    pub garage: GarageStore,
}

impl AppState {
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            assistant: Arc::new(Assistant::default()),
            garage: GarageStore::new(),
        }
    }

    /// Replace the garage store (e.g., one with a configured session cap).
    pub fn with_garage(mut self, garage: GarageStore) -> Self {
        self.garage = garage;
        self
    }

    /// Load the catalog from a source.
    pub async fn from_source(source: &dyn CatalogSource) -> CatalogResult<Self> {
        let vehicles = source.load().await?;
        tracing::info!(
            source = %source.describe(),
            vehicles = vehicles.len(),
            "catalog snapshot ready"
        );
        Ok(Self::with_catalog(Catalog::new(vehicles)))
    }

    /// State backed by the bundled sample catalog (development / tests).
    pub fn with_sample_data() -> Self {
        Self::with_catalog(Catalog::new(sample_catalog()))
    }

    /// State with an empty catalog.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
