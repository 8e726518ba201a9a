use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use catalog_products::Product;

use super::r#trait::{CatalogBackend, StoreError};

/// Backend that keeps the catalog as one pretty-printed JSON array on disk.
///
/// Saves go to a sibling temporary file which is then renamed over the target, so
/// the file on disk is always either the old or the new collection.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "catalog.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl CatalogBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<Product>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            // No file yet: empty catalog.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // serde_json leaves non-ASCII characters unescaped.
        let mut bytes = serde_json::to_vec_pretty(products)?;
        bytes.push(b'\n');

        let tmp = self.temp_path();
        let mut file = fs::File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), records = products.len(), "catalog saved");
        Ok(())
    }
}
