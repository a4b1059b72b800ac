//! Export command implementation
//!
//! Runs the export pipeline against the configured store and delivers the
//! result into the output directory.

use crate::adapters::download::fs::FsSink;
use crate::adapters::store::factory::create_store;
use crate::config::load_config;
use crate::core::export::orchestrator::ExportOrchestrator;
use crate::core::export::summary::ExportOutcome;
use clap::Args;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Bundle photo attachments into a ZIP backup instead of plain CSV
    #[arg(long)]
    pub with_photos: bool,

    /// Override the delivery directory from the configuration
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Allow replacing an existing file of the same name
    #[arg(long)]
    pub overwrite: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(with_photos = self.with_photos, "Starting export command");

        let mut config = load_config(config_path)?;

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }

        if self.overwrite {
            config.export.overwrite = true;
        }

        let store = match create_store(&config) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create inventory store");
                eprintln!("Failed to open inventory store: {e}");
                return Ok(4);
            }
        };

        let sink = Arc::new(
            FsSink::new(config.export.output_dir.clone()).with_overwrite(config.export.overwrite),
        );

        let mut orchestrator = ExportOrchestrator::new(store, sink)
            .with_archive_verification(config.verification.enable_verification);

        let summary = if self.with_photos {
            orchestrator.export_with_photos().await
        } else {
            orchestrator.export_csv().await
        };

        println!();
        match summary.outcome {
            ExportOutcome::Delivered => {
                println!("📊 Export Summary:");
                println!("  Items: {}", summary.items_exported);
                if self.with_photos {
                    println!("  Photos: {}", summary.photos_exported);
                }
                if let Some(filename) = &summary.filename {
                    println!(
                        "  File: {}/{}",
                        config.export.output_dir.trim_end_matches('/'),
                        filename
                    );
                }
                println!("  Size: {} bytes", summary.bytes_written);
                if let Some(checksum) = &summary.checksum {
                    println!("  SHA-256: {checksum}");
                }
                println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

                if let Some(report) = &summary.verification {
                    if report.is_success() {
                        println!("  Verification: passed");
                    } else {
                        println!("  ⚠️  Verification failures:");
                        for failure in &report.failures {
                            println!("    - {failure}");
                        }
                    }
                }

                println!();
                if summary.is_successful() {
                    println!("✅ {}", summary.message);
                    Ok(0)
                } else {
                    println!("⚠️  Export delivered but verification failed");
                    Ok(1)
                }
            }
            ExportOutcome::Rejected | ExportOutcome::Failed => {
                println!("❌ {}", summary.message);
                Ok(1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_args_defaults() {
        let args = ExportArgs {
            with_photos: false,
            output_dir: None,
            overwrite: false,
        };

        assert!(!args.with_photos);
        assert!(args.output_dir.is_none());
        assert!(!args.overwrite);
    }

    #[test]
    fn test_export_args_with_overrides() {
        let args = ExportArgs {
            with_photos: true,
            output_dir: Some("/tmp/exports".to_string()),
            overwrite: true,
        };

        assert!(args.with_photos);
        assert_eq!(args.output_dir, Some("/tmp/exports".to_string()));
        assert!(args.overwrite);
    }
}
