use std::path::PathBuf;

use tokio::fs;

use crate::domain::Product;

/// Persistence adapter errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unreadable or unwritable: {0}")]
    Io(#[from] std::io::Error),
    #[error("store contains malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat-file persistence adapter. The entire catalog lives in one JSON array
/// at `path`; every write serializes the full collection and overwrites the
/// file. There is no crash-safety guarantee and no lock around concurrent
/// writers (last writer wins) - a known limitation of the storage model.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Startup probe: the file must exist and be readable.
    pub async fn check(&self) -> Result<(), StoreError> {
        fs::read(&self.path).await?;
        Ok(())
    }

    pub async fn read(&self) -> Result<Vec<Product>, StoreError> {
        let raw = fs::read(&self.path).await?;
        let products = serde_json::from_slice(&raw)?;
        Ok(products)
    }

    pub async fn write(&self, products: &[Product]) -> Result<(), StoreError> {
        let raw = serde_json::to_vec(products)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}
