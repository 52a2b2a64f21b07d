//! Types shared by every crate of the zakat ledger workspace.

pub mod crypto;
pub mod error;
pub mod genesis;
pub mod transactions;
pub mod utils;

pub use error::{LedgerError, Result};
pub use transactions::{Amount, TransferRecord};
