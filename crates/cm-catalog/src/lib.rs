//! Vehicle catalog for Carmate.
//!
//! Provides the read-only `Vehicle` record, a `CatalogSource` abstraction for
//! loading snapshots (JSON file or in-memory mock), the canonical catalog
//! filter used by every downstream consumer, and simple catalog queries
//! (lookup by id, pagination, region/year filtering).

pub mod catalog;
pub mod error;
pub mod filter;
mod lenient;
pub mod mock;
pub mod source;
pub mod vehicle;

// Re-export key types for convenience
pub use catalog::{Catalog, Page};
pub use error::{CatalogError, CatalogResult};
pub use filter::{Filters, apply_filters};
pub use mock::{MockCatalogSource, sample_catalog};
pub use source::{CatalogSource, FileCatalogSource};
pub use vehicle::{Efficiency, Inventory, Vehicle};
