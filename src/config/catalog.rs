//! Activity catalog configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the scraped activity list is read from
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSON array of activity records
    #[serde(default = "default_path")]
    pub path: String,

    /// Refuse to start when the catalog cannot be loaded
    #[serde(default)]
    pub required: bool,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("catalog.path"));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            required: false,
        }
    }
}

fn default_path() -> String {
    "activities_data.json".to_string()
}
