use zakat_common::error::Result;
use zakat_common::transactions::TransferRecord;

/// Transfers that were applied to the balances but are not sealed into a
/// ledger entry yet.
///
/// Records keep their arrival order. The batch is only ever emptied through
/// [`PendingBatch::clear`], which the batch coordinator calls after a
/// successful commit.
#[derive(Debug, Default, Clone)]
pub struct PendingBatch {
    transfers: Vec<TransferRecord>,
}

impl PendingBatch {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
        }
    }

    /// Appends an already applied transfer. No validation happens here.
    pub fn push(&mut self, record: TransferRecord) {
        tracing::debug!(
            "Pending transfer #{}: {} | levy {}",
            self.transfers.len() + 1,
            record.main_leg(),
            record.levy
        );
        self.transfers.push(record);
    }

    pub fn records(&self) -> &[TransferRecord] {
        &self.transfers
    }

    /// Canonical payload text for the current batch: compact JSON array of
    /// the records in arrival order.
    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.transfers)?)
    }

    /// Empties the batch, returning how many records were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.transfers.len();
        self.transfers.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}
