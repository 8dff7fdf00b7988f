//! Fingerprint of the loaded launch data.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of the raw CSV bytes.
///
/// # Returns
/// Hexadecimal string representation of the hash.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
