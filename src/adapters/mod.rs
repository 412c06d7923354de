//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Catalog sources (JSON file, in-memory)
//! - `http` - REST endpoints for the chat client

pub mod catalog;
pub mod http;

pub use catalog::{InMemoryCatalogSource, JsonFileCatalogSource};
pub use http::{app_router, dialog_routes, DialogHandlers};
