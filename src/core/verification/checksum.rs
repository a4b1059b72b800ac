//! Checksum calculation for delivered exports
//!
//! Every export records a SHA-256 checksum of the delivered bytes so a
//! backup can later be matched against the summary that produced it.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw bytes
///
/// # Returns
///
/// A hex-encoded SHA-256 checksum string (64 characters).
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_shape() {
        let checksum = calculate_checksum_bytes(b"Hello, World!");
        assert_eq!(checksum.len(), 64);
        assert!(checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_checksum_deterministic() {
        let a = calculate_checksum_bytes(b"backup bytes");
        let b = calculate_checksum_bytes(b"backup bytes");
        assert_eq!(a, b);
    }

    #[test]
    fn test_checksum_distinguishes_content() {
        let a = calculate_checksum_bytes(b"backup one");
        let b = calculate_checksum_bytes(b"backup two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_checksum_known_value() {
        // sha256 of the empty input
        assert_eq!(
            calculate_checksum_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
