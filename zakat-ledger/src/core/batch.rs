use serde::{Deserialize, Serialize};
use zakat_common::error::{LedgerError, Result};
use zakat_common::transactions::TransferRecord;
use zakat_mempool::PendingBatch;

use crate::core::chain::Chain;

/// Destination for sealed batches.
pub trait BlockSink {
    /// Seals `payload` into a new entry and returns its hash.
    fn append_block(&mut self, payload: String, session_id: &str) -> Result<String>;

    /// Number of entries after the last append.
    fn block_count(&self) -> usize;
}

impl BlockSink for Chain {
    fn append_block(&mut self, payload: String, session_id: &str) -> Result<String> {
        Ok(self.append(payload, session_id)?.hash.clone())
    }

    fn block_count(&self) -> usize {
        self.len()
    }
}

/// What a successful commit produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReceipt {
    /// Chain length including the new entry.
    pub chain_length: usize,
    /// Transfers sealed into the new entry.
    pub committed: usize,
    pub block_hash: String,
}

/// Accumulates applied transfers and seals them into the chain on demand.
#[derive(Debug, Default)]
pub struct BatchCoordinator {
    pending: PendingBatch,
}

impl BatchCoordinator {
    pub fn new() -> Self {
        Self {
            pending: PendingBatch::new(),
        }
    }

    pub fn record_pending(&mut self, record: TransferRecord) {
        self.pending.push(record);
    }

    /// Seals every pending transfer into one entry.
    ///
    /// The pending batch is cleared only after the sink accepted the entry; on
    /// any error it is left as it was so the commit can be retried.
    pub fn commit<S: BlockSink>(&mut self, sink: &mut S, session_id: &str) -> Result<CommitReceipt> {
        if self.pending.is_empty() {
            return Err(LedgerError::EmptyBatch);
        }

        let payload = self.pending.to_payload()?;
        let block_hash = sink.append_block(payload, session_id).map_err(|e| {
            tracing::error!("Failed to seal {} pending transfers: {}", self.pending.len(), e);
            e
        })?;

        let committed = self.pending.clear();
        let receipt = CommitReceipt {
            chain_length: sink.block_count(),
            committed,
            block_hash,
        };

        tracing::info!(
            "Block #{} sealed with {} transfers: {}",
            receipt.chain_length - 1,
            receipt.committed,
            receipt.block_hash
        );
        Ok(receipt)
    }

    pub fn pending(&self) -> &[TransferRecord] {
        self.pending.records()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
