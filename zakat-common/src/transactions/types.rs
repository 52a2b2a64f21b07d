use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-point amount used for every balance and transfer.
pub type Amount = Decimal;

/// One applied transfer, as it is recorded in the pending batch and later
/// sealed into a ledger entry.
///
/// Field order is part of the canonical payload encoding; reordering fields
/// changes every entry hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub sender: String,
    pub receiver: String,
    /// Principal credited to the receiver.
    pub amount: Amount,
    /// Levy routed to `collection_account`.
    pub levy: Amount,
    /// `amount + levy`, debited from the sender.
    pub total_debit: Amount,
    pub collection_account: String,
    /// Unix milliseconds.
    pub timestamp: i64,
}

impl TransferRecord {
    /// Human readable form of the principal leg, e.g. `alice -> bob: 100`.
    pub fn main_leg(&self) -> String {
        format!("{} -> {}: {}", self.sender, self.receiver, self.amount)
    }

    /// Human readable form of the levy leg, e.g. `alice -> ZAKAT_FUND: 2.50`.
    pub fn levy_leg(&self) -> String {
        format!("{} -> {}: {}", self.sender, self.collection_account, self.levy)
    }
}
