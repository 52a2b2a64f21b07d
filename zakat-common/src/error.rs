use rust_decimal::Decimal;
use thiserror::Error;

/// Why a chain failed validation at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// `prior_hash` does not match the previous entry's stored hash.
    BrokenLink,
    /// The stored hash does not match a recomputation over the entry's fields.
    HashMismatch,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::BrokenLink => write!(f, "prior hash does not link to previous entry"),
            InvalidReason::HashMismatch => write!(f, "stored hash does not match contents"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Account '{0}' already exists")]
    DuplicateAccount(String),

    #[error("Account '{0}' does not exist")]
    UnknownAccount(String),

    #[error("Invalid account id: {0:?}")]
    InvalidAccountId(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The sender cannot cover principal plus levy.
    #[error(
        "Insufficient balance in '{account}': required {required} (amount {principal} + levy {levy}), available {available}, short by {shortfall}"
    )]
    InsufficientBalance {
        account: String,
        principal: Decimal,
        levy: Decimal,
        required: Decimal,
        available: Decimal,
        shortfall: Decimal,
    },

    #[error("No pending transfers to commit")]
    EmptyBatch,

    /// The freshly built entry does not link to the chain tip.
    ///
    /// This is a consistency fault and is never retried automatically.
    #[error("Chain append failed: entry links to {found}, tip is {expected}")]
    ChainAppendFailed { expected: String, found: String },

    #[error("Chain invalid at index {index}: {reason}")]
    ChainInvalid { index: usize, reason: InvalidReason },

    #[error("Restore error: {0}")]
    Restore(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
