//! Infrastructure layer: persistence of the product catalog.

pub mod catalog_store;

#[cfg(test)]
mod test_support;

pub use catalog_store::{CatalogBackend, CatalogStore, InMemoryBackend, JsonFileBackend, StoreError};
