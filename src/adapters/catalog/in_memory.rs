//! In-Memory Catalog Source
//!
//! Serves a fixed set of records. Useful for testing and development.

use async_trait::async_trait;

use crate::domain::catalog::{ActivityRecord, Catalog};
use crate::ports::{CatalogError, CatalogSource};

/// Catalog source backed by records held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    records: Option<Vec<ActivityRecord>>,
}

impl InMemoryCatalogSource {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    /// A source that reports the catalog as missing
    pub fn unavailable() -> Self {
        Self { records: None }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.records
            .clone()
            .map(Catalog::new)
            .ok_or_else(|| CatalogError::NotFound(self.describe()))
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}
