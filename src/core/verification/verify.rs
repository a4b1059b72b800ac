//! Post-export archive verification
//!
//! Re-opens a delivered ZIP from its bytes and checks the structural
//! contract: the manifest entry exists with the expected row count, and
//! the photo-entry count matches the snapshot. Failures land in the
//! report, not in the caller's face — the file has already shipped.

use crate::core::export::archive::MANIFEST_NAME;
use crate::core::verification::report::VerificationReport;
use crate::domain::errors::VaultError;
use crate::domain::Result;
use std::io::{Cursor, Read};

/// Verifies a photo-export archive against its source snapshot
pub struct ArchiveVerifier {
    expected_items: usize,
    expected_photos: usize,
}

impl ArchiveVerifier {
    /// Creates a verifier for a snapshot of `items` records carrying
    /// `photos` attachments in total
    pub fn new(expected_items: usize, expected_photos: usize) -> Self {
        Self {
            expected_items,
            expected_photos,
        }
    }

    /// Runs all checks against the archive bytes
    ///
    /// # Errors
    ///
    /// Returns an error only when the bytes are not a readable ZIP at all;
    /// content mismatches are reported as failures, not errors.
    pub fn verify(&self, bytes: &[u8]) -> Result<VerificationReport> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| VaultError::Serialization(format!("unreadable archive: {e}")))?;

        let mut failures = Vec::new();
        let expected_rows = self.expected_items + 1;

        let names: Vec<String> = archive.file_names().map(String::from).collect();
        let manifest_found = names.iter().any(|n| n == MANIFEST_NAME);
        let photo_entries = names.iter().filter(|n| n.as_str() != MANIFEST_NAME).count();

        let manifest_rows = if manifest_found {
            let mut manifest = String::new();
            archive
                .by_name(MANIFEST_NAME)
                .map_err(|e| VaultError::Serialization(format!("manifest entry: {e}")))?
                .read_to_string(&mut manifest)
                .map_err(|e| VaultError::Serialization(format!("manifest entry: {e}")))?;
            count_csv_rows(&manifest)?
        } else {
            failures.push(format!("manifest {MANIFEST_NAME} missing"));
            0
        };

        if manifest_found && manifest_rows != expected_rows {
            failures.push(format!(
                "expected {expected_rows} manifest rows, found {manifest_rows}"
            ));
        }

        if photo_entries != self.expected_photos {
            failures.push(format!(
                "expected {} photo entries, found {photo_entries}",
                self.expected_photos
            ));
        }

        tracing::debug!(
            manifest_found,
            manifest_rows,
            photo_entries,
            failures = failures.len(),
            "Archive verification finished"
        );

        Ok(VerificationReport {
            manifest_found,
            manifest_rows,
            expected_rows,
            photo_entries,
            expected_photos: self.expected_photos,
            failures,
        })
    }
}

/// CSV-aware row count (header included)
///
/// Quoted fields may span lines, so a plain line count would overcount
/// records with multiline notes.
fn count_csv_rows(manifest: &str) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(manifest.as_bytes());

    let mut rows = 0;
    for record in reader.records() {
        record.map_err(|e| VaultError::Serialization(format!("manifest csv: {e}")))?;
        rows += 1;
    }
    Ok(rows)
}
