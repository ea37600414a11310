//! Catalog source abstraction: load vehicle snapshots from files, mocks, or other backends.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{CatalogError, CatalogResult};
use crate::vehicle::Vehicle;

/// Abstraction over where catalog snapshots come from.
///
/// Enables mocking in tests and swappable backends (JSON file today,
/// a database-backed loader later).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full ordered catalog.
    async fn load(&self) -> CatalogResult<Vec<Vehicle>>;

    /// Short description of the source (for logging).
    fn describe(&self) -> String;
}

/// Reads a JSON array of vehicles from the local filesystem.
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> CatalogResult<Vec<Vehicle>> {
        let name = self.path.display().to_string();
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(name.clone())
            } else {
                CatalogError::Io(format!("{name}: {e}"))
            }
        })?;
        let vehicles = parse_catalog(&name, &content)?;
        tracing::info!(path = %name, vehicles = vehicles.len(), "catalog loaded");
        Ok(vehicles)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Parse a JSON catalog, rejecting snapshots with duplicate identifiers.
pub fn parse_catalog(source_name: &str, content: &str) -> CatalogResult<Vec<Vehicle>> {
    let vehicles: Vec<Vehicle> =
        serde_json::from_str(content).map_err(|e| CatalogError::Parse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    let mut seen = HashSet::new();
    for v in &vehicles {
        if !seen.insert(v.id.as_str()) {
            return Err(CatalogError::DuplicateId(v.id.clone()));
        }
    }
    Ok(vehicles)
}
