use std::sync::RwLock;

use catalog_products::Product;

use super::r#trait::{CatalogBackend, StoreError};

/// In-memory backend for tests/dev. Lost on process exit.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    products: RwLock<Vec<Product>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogBackend for InMemoryBackend {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(products.clone())
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut stored = self.products.write().map_err(|_| StoreError::LockPoisoned)?;
        *stored = products.to_vec();
        Ok(())
    }
}
