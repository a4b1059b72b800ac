//! Export orchestrator
//!
//! Coordinates one export end to end: snapshot the store, validate
//! preconditions, serialize (CSV or photo archive), deliver through the
//! download sink, and optionally verify the produced archive. Every
//! failure is recovered here and converted into a user-visible notice —
//! nothing propagates past this boundary.

use crate::adapters::download::traits::DownloadSink;
use crate::adapters::store::traits::InventoryStore;
use crate::core::export::archive::build_archive;
use crate::core::export::artifact::ExportResult;
use crate::core::export::csv::serialize_items;
use crate::core::export::state::{ExportPhase, Notice};
use crate::core::export::summary::{ExportOutcome, ExportSummary};
use crate::core::verification::{calculate_checksum_bytes, ArchiveVerifier, VerificationReport};
use crate::domain::errors::ExportError;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

/// Success message posted after a delivered export
pub const SUCCESS_MESSAGE: &str = "Data exported successfully!";

/// Which pipeline an operation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    Csv,
    Photos,
}

/// Export orchestrator
///
/// Operations take `&mut self`, so a second export cannot start while one
/// is in flight — the trigger is disabled for the duration of the call by
/// construction. Each operation replaces the previous notice; errors never
/// stack.
pub struct ExportOrchestrator {
    store: Arc<dyn InventoryStore + Send + Sync>,
    sink: Arc<dyn DownloadSink + Send + Sync>,
    verify_archives: bool,
    phase: ExportPhase,
    notice: Option<Notice>,
}

impl ExportOrchestrator {
    /// Creates an orchestrator over the injected store and sink
    pub fn new(
        store: Arc<dyn InventoryStore + Send + Sync>,
        sink: Arc<dyn DownloadSink + Send + Sync>,
    ) -> Self {
        Self {
            store,
            sink,
            verify_archives: false,
            phase: ExportPhase::Idle,
            notice: None,
        }
    }

    /// Enables post-export verification of produced archives
    pub fn with_archive_verification(mut self, enabled: bool) -> Self {
        self.verify_archives = enabled;
        self
    }

    /// Current phase of the control
    pub fn phase(&self) -> ExportPhase {
        self.phase
    }

    /// The posted notice, expired or not
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The posted notice, only while still visible
    pub fn visible_notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_visible())
    }

    /// Exports the inventory as a CSV download
    ///
    /// Empty inventories are rejected with `"No items to export"` and
    /// deliver nothing.
    pub async fn export_csv(&mut self) -> ExportSummary {
        tracing::info!("Starting CSV export");
        self.run(ExportKind::Csv).await
    }

    /// Exports the inventory as a photo-bundling ZIP download
    ///
    /// Empty inventories and photo-less inventories are rejected with
    /// their respective messages and deliver nothing.
    pub async fn export_with_photos(&mut self) -> ExportSummary {
        tracing::info!("Starting photo export");
        self.run(ExportKind::Photos).await
    }

    async fn run(&mut self, kind: ExportKind) -> ExportSummary {
        let start = Instant::now();

        self.phase = ExportPhase::Validating;
        let items = match self.store.list_all_items().await {
            Ok(items) => items,
            Err(e) => {
                return self.finish_failed(ExportOutcome::Failed, e.to_string(), start);
            }
        };

        if items.is_empty() {
            return self.finish_failed(
                ExportOutcome::Rejected,
                ExportError::EmptyInput.to_string(),
                start,
            );
        }

        let total_photos: usize = items.iter().map(|item| item.photos.len()).sum();
        if kind == ExportKind::Photos && total_photos == 0 {
            return self.finish_failed(
                ExportOutcome::Rejected,
                ExportError::NoPhotos.to_string(),
                start,
            );
        }

        self.phase = ExportPhase::Serializing;
        let stamped = Utc::now();
        let built = match kind {
            ExportKind::Csv => {
                serialize_items(&items).map(|text| ExportResult::csv(stamped, text.into_bytes()))
            }
            ExportKind::Photos => {
                build_archive(&items).map(|bytes| ExportResult::archive(stamped, bytes))
            }
        };
        let artifact = match built {
            Ok(artifact) => artifact,
            Err(e) => {
                return self.finish_failed(ExportOutcome::Failed, e.to_string(), start);
            }
        };

        self.phase = ExportPhase::Downloading;
        if let Err(e) = self.sink.deliver(&artifact).await {
            return self.finish_failed(ExportOutcome::Failed, e.to_string(), start);
        }

        let mut summary = ExportSummary::delivered(SUCCESS_MESSAGE);
        summary.items_exported = items.len();
        summary.photos_exported = match kind {
            ExportKind::Photos => total_photos,
            ExportKind::Csv => 0,
        };
        summary.filename = Some(artifact.filename.clone());
        summary.bytes_written = artifact.len();
        summary.checksum = Some(calculate_checksum_bytes(&artifact.bytes));

        if kind == ExportKind::Photos && self.verify_archives {
            summary.verification =
                Some(self.verify_archive(&artifact, items.len(), total_photos));
        }

        self.phase = ExportPhase::Idle;
        self.notice = Some(Notice::success(SUCCESS_MESSAGE));

        let summary = summary.with_duration(start.elapsed());
        summary.log_summary();
        summary
    }

    /// Verification runs after delivery; a report with failures never
    /// retracts the already-delivered file.
    fn verify_archive(
        &self,
        artifact: &ExportResult,
        item_count: usize,
        photo_count: usize,
    ) -> VerificationReport {
        match ArchiveVerifier::new(item_count, photo_count).verify(&artifact.bytes) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Archive verification could not run");
                VerificationReport {
                    manifest_found: false,
                    manifest_rows: 0,
                    expected_rows: item_count + 1,
                    photo_entries: 0,
                    expected_photos: photo_count,
                    failures: vec![format!("verification could not run: {e}")],
                }
            }
        }
    }

    fn finish_failed(
        &mut self,
        outcome: ExportOutcome,
        message: String,
        start: Instant,
    ) -> ExportSummary {
        self.phase = ExportPhase::Idle;
        // Replaces any previous notice; errors never stack
        self.notice = Some(Notice::error(message.clone()));

        let summary = ExportSummary::failed(outcome, message).with_duration(start.elapsed());
        summary.log_summary();
        summary
    }
}
