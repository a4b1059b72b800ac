//! CSV serialization of inventory snapshots
//!
//! Produces RFC-4180 CSV text with a fixed header row. Fields containing
//! commas, double quotes, or newlines are quoted with internal quotes
//! doubled; missing optional fields render as the empty string. The same
//! output doubles as the manifest embedded in photo-export archives.

use crate::domain::errors::ExportError;
use crate::domain::item::ItemRecord;
use chrono::SecondsFormat;

/// Fixed column order of the export CSV
///
/// Header names use the store's wire-format spelling.
pub const CSV_HEADER: [&str; 9] = [
    "name",
    "barcode",
    "quantity",
    "minQuantity",
    "category",
    "location",
    "notes",
    "createdAt",
    "updatedAt",
];

/// Serializes an inventory snapshot to CSV text
///
/// # Errors
///
/// Returns [`ExportError::EmptyInput`] for a zero-record snapshot and
/// [`ExportError::Serialization`] if the writer fails on malformed data.
pub fn serialize_items(items: &[ItemRecord]) -> Result<String, ExportError> {
    if items.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    for item in items {
        writer
            .write_record(&item_row(item))
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Serialization(e.to_string()))?;

    String::from_utf8(bytes).map_err(|e| ExportError::Serialization(e.to_string()))
}

/// Renders one item as a CSV row in [`CSV_HEADER`] order
///
/// Stored values are reproduced verbatim; nothing is defaulted or derived
/// here. Timestamps render in the store's wire form (ISO-8601 UTC with
/// millisecond precision).
fn item_row(item: &ItemRecord) -> [String; 9] {
    [
        item.name.clone(),
        item.barcode.clone().unwrap_or_default(),
        item.quantity.to_string(),
        item.min_quantity.map(|q| q.to_string()).unwrap_or_default(),
        item.category.clone().unwrap_or_default(),
        item.location.clone().unwrap_or_default(),
        item.notes.clone().unwrap_or_default(),
        item.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        item.updated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    ]
}
