//! Inventory store factory
//!
//! Creates the configured store adapter behind the trait object the rest
//! of the pipeline works with.

use crate::adapters::store::json::JsonStore;
use crate::adapters::store::memory::MemoryStore;
use crate::adapters::store::traits::InventoryStore;
use crate::config::schema::{StoreBackend, VaultConfig};
use crate::domain::errors::VaultError;
use crate::domain::Result;
use std::sync::Arc;

/// Create an inventory store based on the configuration
///
/// # Errors
///
/// Returns an error if the configuration names a backend without its
/// required settings.
pub fn create_store(config: &VaultConfig) -> Result<Arc<dyn InventoryStore + Send + Sync>> {
    match config.store.backend {
        StoreBackend::Json => {
            let path = config.store.path.as_ref().ok_or_else(|| {
                VaultError::Configuration(
                    "store.path is required when store.backend = 'json'".to_string(),
                )
            })?;

            tracing::info!(path = %path, "Creating JSON inventory store");
            Ok(Arc::new(JsonStore::new(path)) as Arc<dyn InventoryStore + Send + Sync>)
        }
        StoreBackend::Memory => {
            tracing::info!("Creating in-memory inventory store");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn InventoryStore + Send + Sync>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::VaultConfig;

    #[test]
    fn test_json_backend_requires_path() {
        let mut config = VaultConfig::default();
        config.store.backend = StoreBackend::Json;
        config.store.path = None;

        assert!(create_store(&config).is_err());
    }

    #[test]
    fn test_memory_backend_needs_no_path() {
        let mut config = VaultConfig::default();
        config.store.backend = StoreBackend::Memory;
        config.store.path = None;

        assert!(create_store(&config).is_ok());
    }
}
