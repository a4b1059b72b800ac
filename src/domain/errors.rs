//! Domain error types
//!
//! This module defines the error hierarchy for MediVault. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main MediVault error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inventory store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Export pipeline errors
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Inventory store errors
///
/// Errors that occur when reading from an inventory store backend.
/// These errors don't expose the backing implementation's types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured store source does not exist
    #[error("Store not found: {0}")]
    NotFound(String),

    /// Reading from the store failed
    #[error("Failed to read store: {0}")]
    ReadFailed(String),

    /// The store contents could not be parsed into item records
    #[error("Failed to parse store contents: {0}")]
    ParseFailed(String),

    /// Backend-specific failure
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Export pipeline errors
///
/// The `Display` output of the precondition variants is user-facing and
/// consumed verbatim by the UI layer, so the wording here is fixed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Zero items in the inventory snapshot
    #[error("No items to export")]
    EmptyInput,

    /// Items present but no photo attachments (photo-export path only)
    #[error("No photos to export. Use \"Export Data\" for CSV only.")]
    NoPhotos,

    /// Malformed field or photo data during CSV/archive construction
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Delivering the finished blob failed
    #[error("Download failed: {0}")]
    DeliveryFailed(String),
}

impl ExportError {
    /// Whether this error is a precondition rejection (nothing was built)
    /// rather than a mid-pipeline failure.
    pub fn is_precondition(&self) -> bool {
        matches!(self, ExportError::EmptyInput | ExportError::NoPhotos)
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VaultError {
    fn from(err: std::io::Error) -> Self {
        VaultError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VaultError {
    fn from(err: serde_json::Error) -> Self {
        VaultError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VaultError {
    fn from(err: toml::de::Error) -> Self {
        VaultError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_error_display() {
        let err = VaultError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::NotFound("items.json".to_string());
        let vault_err: VaultError = store_err.into();
        assert!(matches!(vault_err, VaultError::Store(_)));
    }

    #[test]
    fn test_export_error_conversion() {
        let export_err = ExportError::EmptyInput;
        let vault_err: VaultError = export_err.into();
        assert!(matches!(vault_err, VaultError::Export(_)));
    }

    #[test]
    fn test_empty_input_message_is_exact() {
        assert_eq!(ExportError::EmptyInput.to_string(), "No items to export");
    }

    #[test]
    fn test_no_photos_message_is_exact() {
        assert_eq!(
            ExportError::NoPhotos.to_string(),
            "No photos to export. Use \"Export Data\" for CSV only."
        );
    }

    #[test]
    fn test_export_error_passes_through_vault_error() {
        // The transparent wrapper must not prefix the user-facing strings.
        let vault_err: VaultError = ExportError::NoPhotos.into();
        assert_eq!(
            vault_err.to_string(),
            "No photos to export. Use \"Export Data\" for CSV only."
        );
    }

    #[test]
    fn test_precondition_classification() {
        assert!(ExportError::EmptyInput.is_precondition());
        assert!(ExportError::NoPhotos.is_precondition());
        assert!(!ExportError::Serialization("bad field".into()).is_precondition());
        assert!(!ExportError::DeliveryFailed("disk full".into()).is_precondition());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let vault_err: VaultError = io_err.into();
        assert!(matches!(vault_err, VaultError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let vault_err: VaultError = json_err.into();
        assert!(matches!(vault_err, VaultError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let vault_err: VaultError = toml_err.into();
        assert!(matches!(vault_err, VaultError::Configuration(_)));
        assert!(vault_err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_vault_error_implements_std_error() {
        let err = VaultError::Other("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
