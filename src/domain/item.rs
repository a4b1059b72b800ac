//! Item record domain model
//!
//! This module defines the core ItemRecord type representing one inventory
//! entry as stored by the inventory store.

use super::photo::Photo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One inventory entry with name, quantity, and descriptive metadata
///
/// Records are owned by the inventory store and read-only to the export
/// pipeline. JSON field names follow the store's wire format (camelCase).
///
/// # Examples
///
/// ```
/// use medivault::domain::item::ItemRecord;
///
/// let item = ItemRecord::builder()
///     .name("Test Aspirin")
///     .quantity(50)
///     .category("Medications")
///     .build()
///     .unwrap();
/// assert_eq!(item.quantity, 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Unique identifier, assigned by the store
    pub id: String,

    /// Non-empty display name
    pub name: String,

    /// Current stock count
    pub quantity: u32,

    /// Restock threshold, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<u32>,

    /// Free-text category label, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-text storage location, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free text, may contain newlines, quotes, commas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Scanned barcode, optional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Ordered photo attachments, possibly empty
    #[serde(default)]
    pub photos: Vec<Photo>,

    /// Timestamp when the record was created, set by the store
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last update, set by the store
    pub updated_at: DateTime<Utc>,
}

impl ItemRecord {
    /// Creates a new builder for constructing an ItemRecord
    pub fn builder() -> ItemRecordBuilder {
        ItemRecordBuilder::default()
    }

    /// Number of photo attachments on this item
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Whether the stock level is at or below the restock threshold
    ///
    /// Items without a configured threshold never count as low.
    pub fn is_low_stock(&self) -> bool {
        match self.min_quantity {
            Some(min) => self.quantity <= min,
            None => false,
        }
    }
}

/// Builder for constructing ItemRecord instances
///
/// `id`, `created_at`, and `updated_at` default to store-assigned values
/// (a fresh UUID and the current time) so callers only set what they need.
#[derive(Debug, Default)]
pub struct ItemRecordBuilder {
    id: Option<String>,
    name: Option<String>,
    quantity: u32,
    min_quantity: Option<u32>,
    category: Option<String>,
    location: Option<String>,
    notes: Option<String>,
    barcode: Option<String>,
    photos: Vec<Photo>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl ItemRecordBuilder {
    /// Creates a new ItemRecordBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record id (defaults to a fresh UUID)
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name (required)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the stock count
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the restock threshold
    pub fn min_quantity(mut self, min_quantity: u32) -> Self {
        self.min_quantity = Some(min_quantity);
        self
    }

    /// Sets the category label
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the storage location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the free-text notes
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the barcode
    pub fn barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    /// Appends a photo attachment
    pub fn photo(mut self, photo: Photo) -> Self {
        self.photos.push(photo);
        self
    }

    /// Replaces the photo list
    pub fn photos(mut self, photos: Vec<Photo>) -> Self {
        self.photos = photos;
        self
    }

    /// Sets the creation timestamp (defaults to now)
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the update timestamp (defaults to now)
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the ItemRecord
    ///
    /// # Errors
    ///
    /// Returns an error if the name is missing or empty.
    pub fn build(self) -> Result<ItemRecord, String> {
        let name = self.name.ok_or("name is required")?;
        if name.trim().is_empty() {
            return Err("name cannot be empty".to_string());
        }

        let now = Utc::now();
        Ok(ItemRecord {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            name,
            quantity: self.quantity,
            min_quantity: self.min_quantity,
            category: self.category,
            location: self.location,
            notes: self.notes,
            barcode: self.barcode,
            photos: self.photos,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let item = ItemRecord::builder()
            .name("Bandages")
            .quantity(12)
            .build()
            .unwrap();

        assert_eq!(item.name, "Bandages");
        assert_eq!(item.quantity, 12);
        assert!(item.min_quantity.is_none());
        assert!(item.photos.is_empty());
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_builder_requires_name() {
        assert!(ItemRecord::builder().quantity(1).build().is_err());
        assert!(ItemRecord::builder().name("   ").build().is_err());
    }

    #[test]
    fn test_builder_assigns_unique_ids() {
        let a = ItemRecord::builder().name("A").build().unwrap();
        let b = ItemRecord::builder().name("B").build().unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_low_stock() {
        let low = ItemRecord::builder()
            .name("Gauze")
            .quantity(2)
            .min_quantity(5)
            .build()
            .unwrap();
        assert!(low.is_low_stock());

        let ok = ItemRecord::builder()
            .name("Gauze")
            .quantity(10)
            .min_quantity(5)
            .build()
            .unwrap();
        assert!(!ok.is_low_stock());

        let no_threshold = ItemRecord::builder().name("Gauze").build().unwrap();
        assert!(!no_threshold.is_low_stock());
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let item = ItemRecord::builder()
            .name("Thermometer")
            .quantity(1)
            .min_quantity(1)
            .build()
            .unwrap();

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"minQuantity\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("min_quantity"));
    }

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{
            "id": "item-1",
            "name": "Plasters",
            "quantity": 3,
            "createdAt": "2025-01-15T10:00:00Z",
            "updatedAt": "2025-01-15T10:00:00Z"
        }"#;

        let item: ItemRecord = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Plasters");
        assert!(item.category.is_none());
        assert!(item.photos.is_empty());
    }
}
