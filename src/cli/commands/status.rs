//! Status command implementation
//!
//! Shows inventory counts from the configured store: totals, photo
//! attachments, and items at or below their restock threshold.

use crate::adapters::store::factory::create_store;
use crate::config::load_config;
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting status command");

        let config = load_config(config_path)?;

        let store = match create_store(&config) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Failed to open inventory store: {e}");
                return Ok(4);
            }
        };

        let items = match store.list_all_items().await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read inventory");
                eprintln!("Failed to read inventory: {e}");
                return Ok(4);
            }
        };

        let total_photos: usize = items.iter().map(|item| item.photo_count()).sum();
        let low_stock = items.iter().filter(|item| item.is_low_stock()).count();

        println!("📦 Inventory Status:");
        println!("  Items: {}", items.len());
        println!("  Photos: {total_photos}");
        println!("  Low stock: {low_stock}");

        if low_stock > 0 {
            println!();
            for item in items.iter().filter(|item| item.is_low_stock()) {
                println!(
                    "  ⚠️  {} ({} left, threshold {})",
                    item.name,
                    item.quantity,
                    item.min_quantity.unwrap_or(0)
                );
            }
        }

        Ok(0)
    }
}
