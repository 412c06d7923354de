//! Catalog source adapters.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryCatalogSource;
pub use json_file::JsonFileCatalogSource;
