//! Photo attachment payloads
//!
//! Photos are carried on item records as data-URI strings
//! (`data:image/<subtype>;base64,<payload>`), the store's wire format.
//! This module provides the validated newtype plus MIME and decode helpers
//! used by the archive builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback extension when the payload carries no usable MIME type
const FALLBACK_EXTENSION: &str = "bin";

/// A single photo attachment, data-URI encoded
///
/// # Examples
///
/// ```
/// use medivault::domain::photo::Photo;
///
/// let photo = Photo::from_bytes("image/png", &[0x89, 0x50, 0x4e, 0x47]);
/// assert_eq!(photo.mime_type(), Some("image/png"));
/// assert_eq!(photo.extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    /// Wraps an existing data-URI string
    ///
    /// The payload is not decoded here; malformed payloads surface when the
    /// archive builder decodes them.
    pub fn from_data_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Encodes raw image bytes into a data-URI payload
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        Self(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
    }

    /// Returns the payload as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the MIME type from the data-URI header, if present
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let header = rest.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Derives a file extension from the MIME subtype
    ///
    /// `image/jpeg` maps to `jpg`; structured subtypes keep the part before
    /// `+` (`svg+xml` becomes `svg`); payloads without a MIME type fall back
    /// to `bin`.
    pub fn extension(&self) -> &str {
        let Some(mime) = self.mime_type() else {
            return FALLBACK_EXTENSION;
        };
        let Some(subtype) = mime.split('/').nth(1) else {
            return FALLBACK_EXTENSION;
        };
        match subtype {
            "" => FALLBACK_EXTENSION,
            "jpeg" => "jpg",
            other => other.split('+').next().unwrap_or(FALLBACK_EXTENSION),
        }
    }

    /// Decodes the base64 payload into raw image bytes
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when the payload is not a
    /// well-formed base64 data URI.
    pub fn decode(&self) -> Result<Vec<u8>, String> {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine as _;

        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| "photo payload is not a data URI".to_string())?;

        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| "data URI has no payload section".to_string())?;

        if !header.ends_with(";base64") {
            return Err("data URI payload is not base64-encoded".to_string());
        }

        STANDARD
            .decode(payload)
            .map_err(|e| format!("invalid base64 payload: {e}"))
    }
}

impl fmt::Display for Photo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Payloads are large; show only the header portion
        let header: String = self.0.chars().take(32).collect();
        write!(f, "{header}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_round_trip() {
        let bytes = vec![0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];
        let photo = Photo::from_bytes("image/jpeg", &bytes);

        assert_eq!(photo.mime_type(), Some("image/jpeg"));
        assert_eq!(photo.decode().unwrap(), bytes);
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(Photo::from_bytes("image/jpeg", b"x").extension(), "jpg");
        assert_eq!(Photo::from_bytes("image/png", b"x").extension(), "png");
        assert_eq!(Photo::from_bytes("image/webp", b"x").extension(), "webp");
        assert_eq!(Photo::from_bytes("image/svg+xml", b"x").extension(), "svg");
    }

    #[test]
    fn test_extension_fallback_without_mime() {
        let photo = Photo::from_data_uri("data:;base64,AAAA");
        assert_eq!(photo.mime_type(), None);
        assert_eq!(photo.extension(), "bin");
    }

    #[test]
    fn test_decode_rejects_non_data_uri() {
        let photo = Photo::from_data_uri("http://example.com/photo.jpg");
        assert!(photo.decode().is_err());
    }

    #[test]
    fn test_decode_rejects_unencoded_payload() {
        let photo = Photo::from_data_uri("data:image/png,rawbytes");
        assert!(photo.decode().is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let photo = Photo::from_data_uri("data:image/png;base64,not!!valid##");
        assert!(photo.decode().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let photo = Photo::from_bytes("image/png", b"abc");
        let json = serde_json::to_string(&photo).unwrap();
        // Serializes as a bare string, matching the store's wire format
        assert!(json.starts_with("\"data:image/png;base64,"));

        let back: Photo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, photo);
    }
}
