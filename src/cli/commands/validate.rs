//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config = %config_path, "Validating configuration");

        match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration is valid: {config_path}");
                println!("  Store backend: {:?}", config.store.backend);
                if let Some(path) = &config.store.path {
                    println!("  Store path: {path}");
                }
                println!("  Output directory: {}", config.export.output_dir);
                println!(
                    "  Archive verification: {}",
                    if config.verification.enable_verification {
                        "enabled"
                    } else {
                        "disabled"
                    }
                );
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("❌ Configuration invalid: {e}");
                Ok(2)
            }
        }
    }
}
