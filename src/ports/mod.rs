//! Ports - Interfaces between the domain and infrastructure.
//!
//! - `CatalogSource` - Loads the read-only activity catalog

mod catalog_source;

pub use catalog_source::{CatalogError, CatalogSource};
