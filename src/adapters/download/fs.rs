//! Filesystem download sink
//!
//! Writes the export blob into a configured output directory, creating
//! the directory on first use. Existing files are never silently
//! overwritten unless the sink was configured to allow it.

use crate::adapters::download::traits::{DeliveryReceipt, DownloadSink};
use crate::core::export::artifact::ExportResult;
use crate::domain::errors::ExportError;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// [`DownloadSink`] writing into a directory on disk
#[derive(Debug, Clone)]
pub struct FsSink {
    output_dir: PathBuf,
    overwrite: bool,
}

impl FsSink {
    /// Creates a sink writing into `output_dir`, refusing overwrites
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            overwrite: false,
        }
    }

    /// Allows replacing an existing file of the same name
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

#[async_trait]
impl DownloadSink for FsSink {
    async fn deliver(&self, export: &ExportResult) -> Result<DeliveryReceipt> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                ExportError::DeliveryFailed(format!(
                    "cannot create {}: {e}",
                    self.output_dir.display()
                ))
            })?;

        let target = self.output_dir.join(&export.filename);
        if !self.overwrite && target.exists() {
            return Err(ExportError::DeliveryFailed(format!(
                "{} already exists",
                target.display()
            ))
            .into());
        }

        tokio::fs::write(&target, &export.bytes).await.map_err(|e| {
            ExportError::DeliveryFailed(format!("cannot write {}: {e}", target.display()))
        })?;

        tracing::info!(
            path = %target.display(),
            bytes = export.bytes.len(),
            mime_type = %export.mime_type,
            "Export delivered"
        );

        Ok(DeliveryReceipt {
            location: target.display().to_string(),
        })
    }
}
