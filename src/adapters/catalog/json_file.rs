//! JSON File Catalog Source
//!
//! Reads the scraped activity list (a JSON array of records) from disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::catalog::Catalog;
use crate::ports::{CatalogError, CatalogSource};

/// File-backed catalog source
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    /// Create a source reading from `path`
    ///
    /// # Example
    /// ```ignore
    /// let source = JsonFileCatalogSource::new("activities_data.json");
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    async fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        if !self.path.exists() {
            return Err(CatalogError::NotFound(self.describe()));
        }

        let json = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::ReadFailed(e.to_string()))?;

        let catalog = Catalog::from_json_str(&json)
            .map_err(|e| CatalogError::ParseFailed(e.to_string()))?;

        tracing::debug!(path = %self.describe(), records = catalog.len(), "catalog file parsed");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
