//! Catalog store: the single owner of persisted product records.
//!
//! Every mutation loads the whole collection from the backend, applies the change
//! in memory and saves the whole collection back. One mutex per store instance
//! serializes that load→mutate→save cycle, so concurrent requests against the same
//! store cannot lose each other's updates. Separate processes writing the same
//! file are not coordinated.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

use std::sync::{Mutex, MutexGuard};

use catalog_core::{DomainError, ProductId};
use catalog_products::{Product, ProductPatch, merge};

pub use in_memory::InMemoryBackend;
pub use json_file::JsonFileBackend;
pub use r#trait::{CatalogBackend, StoreError};

#[derive(Debug)]
pub struct CatalogStore<B> {
    backend: B,
    write_lock: Mutex<()>,
}

impl<B: CatalogBackend> CatalogStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        let _guard = self.lock()?;
        self.backend.load()
    }

    pub fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        let _guard = self.lock()?;
        self.backend
            .load()?
            .into_iter()
            .find(|p| p.id_typed() == id)
            .ok_or_else(|| DomainError::not_found(id).into())
    }

    /// Append a canonical record, rejecting a SKU already present (exact,
    /// case-sensitive match).
    pub fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let _guard = self.lock()?;
        let mut products = self.backend.load()?;

        if products.iter().any(|p| p.sku() == product.sku()) {
            tracing::warn!(sku = product.sku(), "insert rejected: duplicate sku");
            return Err(DomainError::duplicate_sku(product.sku()).into());
        }

        products.push(product.clone());
        self.backend.save(&products)?;

        tracing::info!(product_id = %product.id_typed(), sku = product.sku(), "product inserted");
        Ok(product)
    }

    /// Remove and return the record with `id`. The collection is untouched when
    /// no record matches.
    pub fn remove(&self, id: ProductId) -> Result<Product, StoreError> {
        let _guard = self.lock()?;
        let mut products = self.backend.load()?;

        let Some(idx) = products.iter().position(|p| p.id_typed() == id) else {
            tracing::warn!(product_id = %id, "remove rejected: not found");
            return Err(DomainError::not_found(id).into());
        };

        let removed = products.remove(idx);
        self.backend.save(&products)?;

        tracing::info!(product_id = %id, sku = removed.sku(), "product removed");
        Ok(removed)
    }

    /// Merge `patch` onto the record with `id` and persist the result in place.
    pub fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let _guard = self.lock()?;
        let mut products = self.backend.load()?;

        let Some(idx) = products.iter().position(|p| p.id_typed() == id) else {
            tracing::warn!(product_id = %id, "update rejected: not found");
            return Err(DomainError::not_found(id).into());
        };

        let updated = products
            .get(idx)
            .ok_or_else(|| DomainError::not_found(id))
            .and_then(|existing| merge(existing, patch))
            .inspect_err(|e| tracing::warn!(product_id = %id, error = %e, "update rejected"))?;

        let sku_taken = products
            .iter()
            .enumerate()
            .any(|(i, p)| i != idx && p.sku() == updated.sku());
        if sku_taken {
            tracing::warn!(product_id = %id, sku = updated.sku(), "update rejected: duplicate sku");
            return Err(DomainError::duplicate_sku(updated.sku()).into());
        }

        if let Some(slot) = products.get_mut(idx) {
            *slot = updated.clone();
        }
        self.backend.save(&products)?;

        tracing::info!(product_id = %id, sku = updated.sku(), "product updated");
        Ok(updated)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, StoreError> {
        self.write_lock.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::test_support::{product, product_with_sku};

    fn store() -> CatalogStore<InMemoryBackend> {
        CatalogStore::new(InMemoryBackend::new())
    }

    fn domain_err(err: StoreError) -> DomainError {
        match err {
            StoreError::Domain(e) => e,
            other => panic!("expected a domain error, got {other:?}"),
        }
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = store();
        let a = store.insert(product_with_sku("A-001")).unwrap();
        let b = store.insert(product_with_sku("B-002")).unwrap();
        let c = store.insert(product_with_sku("C-003")).unwrap();

        let ids: Vec<_> = store.list().unwrap().iter().map(Product::id_typed).collect();
        assert_eq!(ids, vec![a.id_typed(), b.id_typed(), c.id_typed()]);
    }

    #[test]
    fn duplicate_sku_is_rejected_and_collection_keeps_one() {
        let store = store();
        store.insert(product_with_sku("DUP-001")).unwrap();

        let err = store.insert(product_with_sku("DUP-001")).unwrap_err();
        assert_eq!(domain_err(err), DomainError::duplicate_sku("DUP-001"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn sku_uniqueness_is_case_sensitive() {
        let store = store();
        store.insert(product_with_sku("abc-001")).unwrap();
        assert!(store.insert(product_with_sku("ABC-001")).is_ok());
    }

    #[test]
    fn remove_returns_the_record_and_drops_it() {
        let store = store();
        let kept = store.insert(product_with_sku("K-001")).unwrap();
        let gone = store.insert(product_with_sku("G-001")).unwrap();

        let removed = store.remove(gone.id_typed()).unwrap();
        assert_eq!(removed, gone);

        let listed = store.list().unwrap();
        assert_eq!(listed, vec![kept]);
    }

    #[test]
    fn remove_unknown_id_leaves_collection_unchanged() {
        let store = store();
        store.insert(product()).unwrap();
        let before = store.list().unwrap();

        let missing = ProductId::new();
        let err = store.remove(missing).unwrap_err();
        assert_eq!(domain_err(err), DomainError::not_found(missing));
        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn get_finds_by_id() {
        let store = store();
        let p = store.insert(product()).unwrap();
        assert_eq!(store.get(p.id_typed()).unwrap(), p);
        assert!(store.get(ProductId::new()).is_err());
    }

    #[test]
    fn update_merges_and_persists() {
        let store = store();
        let p = store.insert(product()).unwrap();
        assert_eq!(p.final_price(), 900.0);

        let updated = store
            .update(
                p.id_typed(),
                ProductPatch {
                    price: Some(500.0),
                    ..ProductPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.final_price(), 450.0);
        assert_eq!(store.get(p.id_typed()).unwrap(), updated);
    }

    #[test]
    fn failed_update_persists_nothing() {
        let store = store();
        let p = store.insert(product()).unwrap();

        let err = store
            .update(
                p.id_typed(),
                ProductPatch {
                    stock: Some(0),
                    price: Some(1.0),
                    ..ProductPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(domain_err(err), DomainError::BusinessRule(_)));
        assert_eq!(store.get(p.id_typed()).unwrap(), p);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = store();
        let missing = ProductId::new();
        let err = store.update(missing, ProductPatch::default()).unwrap_err();
        assert_eq!(domain_err(err), DomainError::not_found(missing));
    }

    #[test]
    fn update_cannot_take_another_records_sku() {
        let store = store();
        store.insert(product_with_sku("ONE-001")).unwrap();
        let two = store.insert(product_with_sku("TWO-002")).unwrap();

        let err = store
            .update(
                two.id_typed(),
                ProductPatch {
                    sku: Some("ONE-001".to_string()),
                    ..ProductPatch::default()
                },
            )
            .unwrap_err();
        assert_eq!(domain_err(err), DomainError::duplicate_sku("ONE-001"));

        // Keeping its own sku is fine.
        let ok = store.update(
            two.id_typed(),
            ProductPatch {
                sku: Some("TWO-002".to_string()),
                ..ProductPatch::default()
            },
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn concurrent_inserts_do_not_lose_updates() {
        let store = Arc::new(store());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    store
                        .insert(product_with_sku(&format!("T{i}-{i:03}")))
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.list().unwrap().len(), 8);
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.json");

        let first = CatalogStore::new(JsonFileBackend::new(&path));
        let a = first.insert(product_with_sku("F-001")).unwrap();
        let b = first.insert(product_with_sku("F-002")).unwrap();
        first.remove(a.id_typed()).unwrap();

        let reopened = CatalogStore::new(JsonFileBackend::new(&path));
        assert_eq!(reopened.list().unwrap(), vec![b]);
    }
}
