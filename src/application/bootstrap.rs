//! Startup wiring: configuration plus catalog source into a dialog engine.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::dialog::{DialogEngine, ResponseExtractor};
use crate::domain::matching::RecommendationFormatter;
use crate::ports::{CatalogError, CatalogSource};

/// Loads the catalog once and builds the shared engine.
///
/// A catalog that fails to load is tolerated unless `catalog.required` is
/// set; the engine then answers matching turns with a structural failure.
///
/// # Errors
///
/// Returns the `CatalogError` when the catalog is required and unavailable.
pub async fn build_engine(
    config: &AppConfig,
    source: &dyn CatalogSource,
) -> Result<DialogEngine, CatalogError> {
    let engine = match source.load_catalog().await {
        Ok(catalog) => {
            tracing::info!(source = %source.describe(), records = catalog.len(), "activity catalog ready");
            DialogEngine::new(Arc::new(catalog))
        }
        Err(e) if config.catalog.required => {
            tracing::error!(source = %source.describe(), error = %e, "activity catalog required but unavailable");
            return Err(e);
        }
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "activity catalog unavailable; recommendations disabled"
            );
            DialogEngine::without_catalog(e.to_string())
        }
    };

    let extractor = match config.dialog.max_children {
        Some(max) => ResponseExtractor::new().with_max_children(max),
        None => ResponseExtractor::new(),
    };

    Ok(engine
        .with_extractor(extractor)
        .with_formatter(RecommendationFormatter::new(config.dialog.description_preview_chars))
        .require_account(config.dialog.require_account))
}
