//! Download sink abstraction
//!
//! A sink consumes a finished export blob whole — delivery is atomic from
//! the pipeline's perspective: the blob lands in full or not at all.

use crate::core::export::artifact::ExportResult;
use crate::domain::Result;
use async_trait::async_trait;

/// Where a delivered export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Sink-specific location (a filesystem path for the CLI sink)
    pub location: String,
}

/// Consumer of finished export blobs
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Delivers the blob
    ///
    /// # Errors
    ///
    /// Returns an error if the blob cannot be delivered; partial delivery
    /// is not permitted.
    async fn deliver(&self, export: &ExportResult) -> Result<DeliveryReceipt>;
}
