//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("invalid catalog data in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("duplicate vehicle id: {0}")]
    DuplicateId(String),

    #[error("catalog source not found: {0}")]
    NotFound(String),
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
