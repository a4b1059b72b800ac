//! Photo-export archive construction
//!
//! Builds the ZIP backup bundle: one CSV manifest identical to the plain
//! CSV export, plus one entry per photo attachment named
//! `{slug}-{index}.{ext}`. Items without photos still appear in the
//! manifest but contribute no entries.

use crate::core::export::csv::serialize_items;
use crate::domain::errors::ExportError;
use crate::domain::item::ItemRecord;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

/// Entry name of the CSV manifest inside the archive
pub const MANIFEST_NAME: &str = "inventory.csv";

/// Upper bound on slug length in photo entry names
pub const SLUG_MAX_LEN: usize = 40;

/// Builds the photo-export ZIP archive for an inventory snapshot
///
/// # Errors
///
/// - [`ExportError::EmptyInput`] for a zero-record snapshot
/// - [`ExportError::NoPhotos`] when no item carries a photo
/// - [`ExportError::Serialization`] for undecodable photo payloads or
///   archive writer failures
pub fn build_archive(items: &[ItemRecord]) -> Result<Vec<u8>, ExportError> {
    if items.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let total_photos: usize = items.iter().map(|item| item.photos.len()).sum();
    if total_photos == 0 {
        return Err(ExportError::NoPhotos);
    }

    let manifest = serialize_items(items)?;

    let mut archive = zip::ZipWriter::new(Cursor::new(Vec::new()));

    archive
        .start_file(MANIFEST_NAME, entry_options())
        .map_err(|e| ExportError::Serialization(format!("manifest entry: {e}")))?;
    archive
        .write_all(manifest.as_bytes())
        .map_err(|e| ExportError::Serialization(format!("manifest entry: {e}")))?;

    for item in items {
        let slug = slugify(&item.name);
        for (index, photo) in item.photos.iter().enumerate() {
            let bytes = photo
                .decode()
                .map_err(|e| ExportError::Serialization(format!("photo for '{}': {e}", item.name)))?;

            let entry = photo_entry_name(&slug, index, photo.extension());
            archive
                .start_file(entry.as_str(), entry_options())
                .map_err(|e| ExportError::Serialization(format!("photo entry {entry}: {e}")))?;
            archive
                .write_all(&bytes)
                .map_err(|e| ExportError::Serialization(format!("photo entry {entry}: {e}")))?;
        }
    }

    let cursor = archive
        .finish()
        .map_err(|e| ExportError::Serialization(format!("archive finish: {e}")))?;

    tracing::debug!(
        items = items.len(),
        photos = total_photos,
        "Built photo-export archive"
    );

    Ok(cursor.into_inner())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Deterministic archive entry name for a photo
///
/// `index` is the zero-based position within the item's photo list;
/// entries are numbered from 1.
pub fn photo_entry_name(slug: &str, index: usize, extension: &str) -> String {
    format!("{}-{}.{}", slug, index + 1, extension)
}

/// Filesystem-safe slug of an item display name
///
/// Lowercases, collapses every non-alphanumeric run to a single `-`,
/// trims separators, and truncates to [`SLUG_MAX_LEN`]. Names with no
/// usable characters fall back to `item`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && !slug.is_empty() {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug.truncate(SLUG_MAX_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}
