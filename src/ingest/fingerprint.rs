//! Content fingerprinting for loaded datasets.

use sha2::{Digest, Sha256};

/// SHA-256 hex fingerprint of raw CSV content.
///
/// Attached to each loaded dataset so cache entries and logs can be traced
/// back to the exact source bytes.
pub fn fingerprint(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
