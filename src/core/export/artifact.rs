//! Export artifacts and filename conventions
//!
//! An export produces a single named byte blob handed to the download
//! sink. Filenames are timestamped with second precision and fixed by the
//! UI contract, so they are built here and nowhere else.

use chrono::{DateTime, Utc};

/// MIME type of CSV exports
pub const CSV_MIME_TYPE: &str = "text/csv";

/// MIME type of photo-export archives
pub const ZIP_MIME_TYPE: &str = "application/zip";

/// A named byte blob produced by one export invocation
///
/// Created per export, consumed immediately by the download sink, never
/// persisted by the pipeline itself.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// Download filename, matching the fixed patterns
    pub filename: String,

    /// MIME type of the payload
    pub mime_type: String,

    /// The serialized payload
    pub bytes: Vec<u8>,
}

impl ExportResult {
    /// Creates a CSV export artifact stamped with the given time
    pub fn csv(at: DateTime<Utc>, bytes: Vec<u8>) -> Self {
        Self {
            filename: csv_filename(at),
            mime_type: CSV_MIME_TYPE.to_string(),
            bytes,
        }
    }

    /// Creates a photo-archive export artifact stamped with the given time
    pub fn archive(at: DateTime<Utc>, bytes: Vec<u8>) -> Self {
        Self {
            filename: zip_filename(at),
            mime_type: ZIP_MIME_TYPE.to_string(),
            bytes,
        }
    }

    /// Payload size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Download name for a CSV export: `medivault-inventory-{timestamp}.csv`
pub fn csv_filename(at: DateTime<Utc>) -> String {
    format!("medivault-inventory-{}.csv", timestamp_token(at))
}

/// Download name for a photo export: `medivault-backup-{timestamp}.zip`
pub fn zip_filename(at: DateTime<Utc>) -> String {
    format!("medivault-backup-{}.zip", timestamp_token(at))
}

/// UTC timestamp in the filename form `YYYY-MM-DDTHH-mm-ss`
///
/// ISO-8601 with colons replaced by hyphens so the name is valid on every
/// filesystem.
fn timestamp_token(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}
