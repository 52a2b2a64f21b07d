use sha2::{Digest, Sha256};

/// Prior-hash sentinel carried by the genesis entry.
pub const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// Computes the SHA-256 digest of the given data and returns it as a hex string.
pub fn digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    hex::encode(result)
}

/// Computes the hash of a ledger entry.
///
/// The hash covers, in this order:
/// - payload (canonical JSON text)
/// - timestamp (little-endian milliseconds)
/// - session id
/// - prior hash
///
/// It does NOT cover the entry's position in the chain, which is implied by
/// the prior-hash link.
pub fn compute_entry_hash(payload: &str, timestamp: i64, session_id: &str, prior_hash: &str) -> String {
    let mut hasher = Sha256::new();

    hasher.update(payload.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(session_id.as_bytes());
    hasher.update(prior_hash.as_bytes());

    hex::encode(hasher.finalize())
}
