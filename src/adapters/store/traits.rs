//! Inventory store abstraction
//!
//! The export pipeline never talks to a concrete store; it reads a full
//! snapshot through this trait. Adapters map their backend failures into
//! the domain `StoreError` taxonomy and never leak implementation types.

use crate::domain::item::ItemRecord;
use crate::domain::Result;
use async_trait::async_trait;

/// Read interface to an inventory store
///
/// The contract is a single full snapshot: `list_all_items` returns every
/// record currently in the store, photos included, with no filtering. The
/// export pipeline holds the snapshot immutably and never writes back.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Returns the full current set of item records
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    async fn list_all_items(&self) -> Result<Vec<ItemRecord>>;

    /// Number of records currently in the store
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    async fn count_items(&self) -> Result<usize> {
        Ok(self.list_all_items().await?.len())
    }
}
