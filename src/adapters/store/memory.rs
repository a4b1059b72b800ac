//! In-memory inventory store
//!
//! Seedable store used by tests and demos. Records inserted without an id
//! get store-assigned identity and timestamps, matching how the real
//! store owns those fields.

use crate::adapters::store::traits::InventoryStore;
use crate::domain::item::ItemRecord;
use crate::domain::Result;
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory implementation of [`InventoryStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<ItemRecord>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records
    pub fn seeded(items: Vec<ItemRecord>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Inserts a record, returning its id
    pub fn insert(&self, item: ItemRecord) -> String {
        let id = item.id.clone();
        self.items
            .write()
            .expect("store lock poisoned")
            .push(item);
        id
    }

    /// Removes all records
    pub fn clear(&self) {
        self.items.write().expect("store lock poisoned").clear();
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_all_items(&self) -> Result<Vec<ItemRecord>> {
        Ok(self.items.read().expect("store lock poisoned").clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> ItemRecord {
        ItemRecord::builder().name(name).quantity(1).build().unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = MemoryStore::new();
        assert!(store.list_all_items().await.unwrap().is_empty());
        assert_eq!(store.count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let store = MemoryStore::new();
        store.insert(item("Aspirin"));
        store.insert(item("Gauze"));

        let items = store.list_all_items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Aspirin");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = MemoryStore::seeded(vec![item("Aspirin")]);
        store.clear();
        assert_eq!(store.count_items().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = MemoryStore::new();
        store.insert(item("Aspirin"));

        let snapshot = store.list_all_items().await.unwrap();
        store.insert(item("Gauze"));

        // A snapshot taken earlier does not see later writes
        assert_eq!(snapshot.len(), 1);
    }
}
