//! Service wiring: which persistence backend the catalog store runs on.

use std::path::Path;
use std::sync::Arc;

use catalog_infra::{CatalogBackend, CatalogStore, InMemoryBackend, JsonFileBackend};

/// Backend-erased store shared by all handlers.
pub type SharedCatalog = CatalogStore<Arc<dyn CatalogBackend>>;

pub struct AppServices {
    catalog: SharedCatalog,
}

impl AppServices {
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self {
            catalog: CatalogStore::new(backend),
        }
    }

    /// Production wiring: one JSON file holds the whole catalog.
    pub fn json_file(path: &Path) -> Self {
        Self::new(Arc::new(JsonFileBackend::new(path)))
    }

    /// Dev/test wiring: nothing touches disk.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBackend::new()))
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices").finish_non_exhaustive()
    }
}
