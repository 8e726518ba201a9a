use std::sync::Arc;

use thiserror::Error;

use catalog_core::DomainError;
use catalog_products::Product;

/// Catalog store failure.
///
/// `Domain` carries every caller-correctable failure (validation, duplicate SKU,
/// unknown id). The other variants are storage faults.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("catalog io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("catalog lock poisoned")]
    LockPoisoned,
}

/// Whole-collection persistence backend.
///
/// The full catalog is the unit of durability: `load` returns every record in
/// insertion order and `save` replaces the stored collection wholesale. A reader
/// must never observe a partially written collection.
pub trait CatalogBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Product>, StoreError>;

    fn save(&self, products: &[Product]) -> Result<(), StoreError>;
}

impl<B> CatalogBackend for Arc<B>
where
    B: CatalogBackend + ?Sized,
{
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        (**self).load()
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        (**self).save(products)
    }
}
