//! Hash-linked, append-only sequence of ledger entries.

pub mod block;
pub mod validation;

use zakat_common::error::{LedgerError, Result};

pub use block::{Block, EntryContents, GENESIS_MARKER, GENESIS_PAYLOAD};
pub use validation::{ValidationFailure, ValidationReport};

/// The ledger's block chain.
///
/// Never empty: the only ways to obtain one are [`Chain::initialize`], which
/// seals the genesis entry, and [`Chain::restore`], which refuses an empty
/// list.
#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Starts a new chain holding only the genesis entry.
    pub fn initialize(session_id: &str) -> Self {
        let genesis = Block::genesis(session_id);
        tracing::debug!("Genesis sealed for session {}: {}", session_id, genesis.hash);
        Self {
            blocks: vec![genesis],
        }
    }

    /// Rebuilds a chain from previously exported entries.
    ///
    /// Only the shape is checked (non-empty, `index` matches position). Hashes
    /// are left for [`Chain::validate`] so tampering stays detectable.
    pub fn restore(blocks: Vec<Block>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(LedgerError::Restore("chain has no genesis entry".to_string()));
        }
        for (position, block) in blocks.iter().enumerate() {
            if block.index != position as u64 {
                return Err(LedgerError::Restore(format!(
                    "entry at position {} claims index {}",
                    position, block.index
                )));
            }
        }
        Ok(Self { blocks })
    }

    /// Seals `payload` into a new entry linked to the current tip.
    ///
    /// On failure the chain is left exactly as it was.
    pub fn append(&mut self, payload: String, session_id: &str) -> Result<&Block> {
        let tip = self.last();
        let block = Block::new(self.blocks.len() as u64, payload, tip.hash.clone(), session_id);

        if block.prior_hash != tip.hash {
            return Err(LedgerError::ChainAppendFailed {
                expected: tip.hash.clone(),
                found: block.prior_hash,
            });
        }

        tracing::debug!("Appending entry #{} -> {}", block.index, block.hash);
        self.blocks.push(block);
        Ok(self.last())
    }

    /// Walks the chain and stops at the first broken link or hash mismatch.
    pub fn validate(&self) -> Result<()> {
        match validation::failures(&self.blocks).next() {
            Some(failure) => Err(LedgerError::ChainInvalid {
                index: failure.index,
                reason: failure.reason,
            }),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Same checks as [`Chain::validate`], but collects every failure.
    pub fn audit(&self) -> ValidationReport {
        ValidationReport {
            length: self.blocks.len(),
            failures: validation::failures(&self.blocks).collect(),
        }
    }

    pub fn last(&self) -> &Block {
        // never empty, see type docs
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
