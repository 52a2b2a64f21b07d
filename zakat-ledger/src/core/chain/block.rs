use serde::{Deserialize, Serialize};
use zakat_common::crypto::hash::{compute_entry_hash, ZERO_HASH};
use zakat_common::transactions::TransferRecord;
use zakat_common::utils::time::current_time_millis;

/// Marker text carried by the genesis entry.
pub const GENESIS_MARKER: &str = "Genesis Block";

/// Canonical payload of the genesis entry: the marker as a JSON string
/// literal, so every payload in the chain is a JSON document.
pub const GENESIS_PAYLOAD: &str = "\"Genesis Block\"";

/// One sealed batch of transfers.
///
/// `hash` is computed once in the constructor. Validation recomputes it into
/// a temporary and compares; nothing ever writes the field again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain (0 = genesis).
    pub index: u64,
    /// Unix milliseconds at construction.
    pub timestamp: i64,
    /// Externally supplied batch/session identifier.
    pub session_id: String,
    /// Canonical JSON payload.
    pub payload: String,
    /// Hash of the previous entry, [`ZERO_HASH`] for genesis.
    pub prior_hash: String,
    pub hash: String,
}

impl Block {
    /// Builds an entry stamped with the current time.
    pub fn new(index: u64, payload: String, prior_hash: String, session_id: &str) -> Self {
        Self::with_timestamp(index, payload, prior_hash, session_id, current_time_millis())
    }

    /// Builds an entry with an explicit timestamp.
    pub fn with_timestamp(
        index: u64,
        payload: String,
        prior_hash: String,
        session_id: &str,
        timestamp: i64,
    ) -> Self {
        let hash = compute_entry_hash(&payload, timestamp, session_id, &prior_hash);
        Self {
            index,
            timestamp,
            session_id: session_id.to_string(),
            payload,
            prior_hash,
            hash,
        }
    }

    pub fn genesis(session_id: &str) -> Self {
        Self::new(0, GENESIS_PAYLOAD.to_string(), ZERO_HASH.to_string(), session_id)
    }

    /// Recomputes the hash from the current field values without storing it.
    pub fn compute_hash(&self) -> String {
        compute_entry_hash(&self.payload, self.timestamp, &self.session_id, &self.prior_hash)
    }

    /// Only the entry at index 0 carrying the marker payload is genesis.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && self.payload == GENESIS_PAYLOAD
    }

    /// Decodes the payload for display or export.
    pub fn contents(&self) -> EntryContents {
        if self.is_genesis() {
            return EntryContents::Genesis {
                marker: GENESIS_MARKER.to_string(),
            };
        }
        match serde_json::from_str::<Vec<TransferRecord>>(&self.payload) {
            Ok(transfers) => EntryContents::Transfers { transfers },
            Err(_) => EntryContents::Opaque {
                text: self.payload.clone(),
            },
        }
    }

    /// Number of transfers sealed in this entry (0 for genesis or opaque payloads).
    pub fn transfer_count(&self) -> usize {
        match self.contents() {
            EntryContents::Transfers { transfers } => transfers.len(),
            _ => 0,
        }
    }
}

/// Read model of an entry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryContents {
    Genesis { marker: String },
    Transfers { transfers: Vec<TransferRecord> },
    /// Payload that is neither the genesis marker nor a transfer list.
    Opaque { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transfer() -> TransferRecord {
        TransferRecord {
            sender: "A".to_string(),
            receiver: "B".to_string(),
            amount: dec!(100),
            levy: dec!(2.50),
            total_debit: dec!(102.50),
            collection_account: "ZAKAT_FUND".to_string(),
            timestamp: 5,
        }
    }

    #[test]
    fn test_genesis_block() {
        let g = Block::genesis("S-1");
        assert_eq!(g.index, 0);
        assert_eq!(g.prior_hash, ZERO_HASH);
        assert_eq!(g.session_id, "S-1");
        assert!(g.is_genesis());
        assert_eq!(
            g.contents(),
            EntryContents::Genesis {
                marker: GENESIS_MARKER.to_string()
            }
        );
        assert_eq!(g.hash, g.compute_hash());
    }

    #[test]
    fn test_genesis_payload_is_json() {
        let marker: String = serde_json::from_str(GENESIS_PAYLOAD).unwrap();
        assert_eq!(marker, GENESIS_MARKER);
    }

    #[test]
    fn test_hash_fixed_at_construction() {
        let mut b = Block::with_timestamp(1, "[]".to_string(), ZERO_HASH.to_string(), "S-1", 42);
        let sealed = b.hash.clone();

        b.payload = "[{}]".to_string();
        assert_eq!(b.hash, sealed);
        assert_ne!(b.compute_hash(), sealed);
    }

    #[test]
    fn test_same_inputs_same_hash() {
        let a = Block::with_timestamp(3, "[]".to_string(), "p".to_string(), "S", 99);
        let b = Block::with_timestamp(3, "[]".to_string(), "p".to_string(), "S", 99);
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn test_contents_decodes_transfers() {
        let payload = serde_json::to_string(&vec![transfer(), transfer()]).unwrap();
        let b = Block::new(1, payload, ZERO_HASH.to_string(), "S-1");

        assert_eq!(b.transfer_count(), 2);
        match b.contents() {
            EntryContents::Transfers { transfers } => assert_eq!(transfers[0], transfer()),
            other => panic!("unexpected contents: {:?}", other),
        }
    }

    #[test]
    fn test_contents_opaque_fallback() {
        let b = Block::new(1, "not json".to_string(), ZERO_HASH.to_string(), "S-1");
        assert_eq!(
            b.contents(),
            EntryContents::Opaque {
                text: "not json".to_string()
            }
        );
        assert_eq!(b.transfer_count(), 0);
    }
}
