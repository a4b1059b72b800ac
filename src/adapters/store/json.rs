//! JSON-file inventory store
//!
//! Reads item records from a JSON array on disk — the CLI's data source
//! when exporting a MediVault backup file. The file is the store's export
//! wire format: an array of camelCase item records.

use crate::adapters::store::traits::InventoryStore;
use crate::domain::errors::StoreError;
use crate::domain::item::ItemRecord;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// [`InventoryStore`] backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store reading from the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InventoryStore for JsonStore {
    async fn list_all_items(&self) -> Result<Vec<ItemRecord>> {
        if !self.path.exists() {
            return Err(StoreError::NotFound(self.path.display().to_string()).into());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::ReadFailed(format!("{}: {e}", self.path.display())))?;

        let items: Vec<ItemRecord> = serde_json::from_str(&contents)
            .map_err(|e| StoreError::ParseFailed(format!("{}: {e}", self.path.display())))?;

        tracing::debug!(
            path = %self.path.display(),
            count = items.len(),
            "Loaded inventory snapshot"
        );

        Ok(items)
    }
}
