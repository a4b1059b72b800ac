//! In-memory download sink
//!
//! Captures delivered blobs for assertions in tests.

use crate::adapters::download::traits::{DeliveryReceipt, DownloadSink};
use crate::core::export::artifact::ExportResult;
use crate::domain::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// [`DownloadSink`] that keeps every delivered blob in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<ExportResult>>,
}

impl MemorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blobs delivered so far
    pub fn delivery_count(&self) -> usize {
        self.delivered.lock().expect("sink lock poisoned").len()
    }

    /// Clones the delivered blobs
    pub fn deliveries(&self) -> Vec<ExportResult> {
        self.delivered.lock().expect("sink lock poisoned").clone()
    }

    /// The most recent delivery, if any
    pub fn last_delivery(&self) -> Option<ExportResult> {
        self.delivered
            .lock()
            .expect("sink lock poisoned")
            .last()
            .cloned()
    }
}

#[async_trait]
impl DownloadSink for MemorySink {
    async fn deliver(&self, export: &ExportResult) -> Result<DeliveryReceipt> {
        self.delivered
            .lock()
            .expect("sink lock poisoned")
            .push(export.clone());

        Ok(DeliveryReceipt {
            location: format!("memory://{}", export.filename),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_captures_deliveries_in_order() {
        let sink = MemorySink::new();
        assert_eq!(sink.delivery_count(), 0);
        assert!(sink.last_delivery().is_none());

        sink.deliver(&ExportResult::csv(Utc::now(), b"one".to_vec()))
            .await
            .unwrap();
        sink.deliver(&ExportResult::archive(Utc::now(), b"two".to_vec()))
            .await
            .unwrap();

        assert_eq!(sink.delivery_count(), 2);
        assert_eq!(sink.last_delivery().unwrap().bytes, b"two".to_vec());
    }
}
