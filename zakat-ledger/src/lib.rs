//! Tamper-evident transfer ledger with an automatic 2.5% levy.
//!
//! - [`core::chain`]: hash-linked entries, append and validation
//! - [`core::ledger`]: balances and the atomic transfer-plus-levy
//! - [`core::batch`]: pending transfers sealed into entries on commit
//! - [`session::LedgerSession`]: owns all of the above for one front-end
//! - [`interface::export`]: JSON documents for the chain and the accounts

pub mod core;
pub mod interface;
pub mod session;

pub use crate::core::batch::{BatchCoordinator, BlockSink, CommitReceipt};
pub use crate::core::chain::{Block, Chain, EntryContents, ValidationFailure, ValidationReport};
pub use crate::core::ledger::{Accounts, LevyHandler, DEFAULT_COLLECTION_ACCOUNT, LEVY_RATE};
pub use crate::interface::export::{AccountsExport, ChainExport};
pub use crate::session::LedgerSession;
