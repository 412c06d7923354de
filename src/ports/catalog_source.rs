//! Catalog Source Port - Interface for loading the activity catalog.
//!
//! The catalog is read once at startup and shared read-only afterwards,
//! so sources only need to support a single full load.

use async_trait::async_trait;

use crate::domain::catalog::Catalog;

/// Errors that can occur while loading the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),

    #[error("Failed to read catalog: {0}")]
    ReadFailed(String),

    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),
}

/// Port for loading activity records
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every activity record
    ///
    /// # Errors
    /// Returns `CatalogError::NotFound` if the source does not exist, or
    /// `ParseFailed` if its contents are not a list of activity records
    async fn load_catalog(&self) -> Result<Catalog, CatalogError>;

    /// Human-readable location of the source, for logging
    fn describe(&self) -> String;
}
