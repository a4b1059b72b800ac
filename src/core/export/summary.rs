//! Export summary and reporting
//!
//! Every orchestrator operation returns a summary describing what was
//! delivered (or why nothing was), for structured logging and the CLI.

use crate::core::verification::report::VerificationReport;
use std::time::Duration;

/// Outcome of an export operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A blob was produced and handed to the download sink
    Delivered,
    /// A precondition rejected the export before anything was built
    Rejected,
    /// The pipeline failed mid-flight
    Failed,
}

/// Summary of one export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// What happened
    pub outcome: ExportOutcome,

    /// User-visible message posted for this operation
    pub message: String,

    /// Items in the exported snapshot
    pub items_exported: usize,

    /// Photo entries bundled (photo path only)
    pub photos_exported: usize,

    /// Delivered filename, when anything was delivered
    pub filename: Option<String>,

    /// Size of the delivered payload in bytes
    pub bytes_written: usize,

    /// SHA-256 checksum of the delivered bytes
    pub checksum: Option<String>,

    /// Duration of the operation
    pub duration: Duration,

    /// Archive verification report (photo path, when enabled)
    pub verification: Option<VerificationReport>,
}

impl ExportSummary {
    /// Summary for a delivered export
    pub fn delivered(message: impl Into<String>) -> Self {
        Self {
            outcome: ExportOutcome::Delivered,
            message: message.into(),
            ..Self::empty()
        }
    }

    /// Summary for a rejected or failed export
    pub fn failed(outcome: ExportOutcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
            ..Self::empty()
        }
    }

    fn empty() -> Self {
        Self {
            outcome: ExportOutcome::Rejected,
            message: String::new(),
            items_exported: 0,
            photos_exported: 0,
            filename: None,
            bytes_written: 0,
            checksum: None,
            duration: Duration::from_secs(0),
            verification: None,
        }
    }

    /// Sets the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the export delivered a file and verification (if any) passed
    pub fn is_successful(&self) -> bool {
        self.outcome == ExportOutcome::Delivered
            && self
                .verification
                .as_ref()
                .map(VerificationReport::is_success)
                .unwrap_or(true)
    }

    /// Log the summary in structured form
    pub fn log_summary(&self) {
        match self.outcome {
            ExportOutcome::Delivered => {
                tracing::info!(
                    items = self.items_exported,
                    photos = self.photos_exported,
                    filename = self.filename.as_deref().unwrap_or(""),
                    bytes = self.bytes_written,
                    duration_ms = self.duration.as_millis() as u64,
                    "Export completed"
                );
            }
            ExportOutcome::Rejected => {
                tracing::warn!(message = %self.message, "Export rejected");
            }
            ExportOutcome::Failed => {
                tracing::error!(message = %self.message, "Export failed");
            }
        }

        if let Some(report) = &self.verification {
            if report.is_success() {
                tracing::info!(
                    photo_entries = report.photo_entries,
                    manifest_rows = report.manifest_rows,
                    "Archive verification passed"
                );
            } else {
                for failure in &report.failures {
                    tracing::warn!(failure = %failure, "Archive verification failure");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_summary() {
        let summary = ExportSummary::delivered("Data exported successfully!")
            .with_duration(Duration::from_millis(12));

        assert_eq!(summary.outcome, ExportOutcome::Delivered);
        assert!(summary.is_successful());
        assert_eq!(summary.duration, Duration::from_millis(12));
    }

    #[test]
    fn test_rejected_summary_is_not_successful() {
        let summary = ExportSummary::failed(ExportOutcome::Rejected, "No items to export");
        assert!(!summary.is_successful());
        assert_eq!(summary.message, "No items to export");
    }

    #[test]
    fn test_failed_verification_marks_unsuccessful() {
        let mut summary = ExportSummary::delivered("Data exported successfully!");
        summary.verification = Some(VerificationReport {
            manifest_found: true,
            manifest_rows: 3,
            expected_rows: 3,
            photo_entries: 1,
            expected_photos: 2,
            failures: vec!["expected 2 photo entries, found 1".to_string()],
        });

        assert!(!summary.is_successful());
    }
}
