//! Structured documents for the chain and the account map.
//!
//! A chain export keeps each entry's raw payload next to its decoded
//! `contents`, so [`ChainExport::into_chain`] rebuilds entries that hash
//! exactly as they did before export. `contents` and `created_at` are display
//! only and ignored on import.

use serde::{Deserialize, Serialize};
use zakat_common::error::Result;
use zakat_common::transactions::Amount;
use zakat_common::utils::time::format_millis;

use crate::core::chain::{Block, Chain, EntryContents};
use crate::core::ledger::Accounts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryView {
    pub index: u64,
    pub timestamp: i64,
    #[serde(default)]
    pub created_at: String,
    pub session_id: String,
    pub prior_hash: String,
    pub hash: String,
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<EntryContents>,
}

impl From<&Block> for EntryView {
    fn from(block: &Block) -> Self {
        Self {
            index: block.index,
            timestamp: block.timestamp,
            created_at: format_millis(block.timestamp),
            session_id: block.session_id.clone(),
            prior_hash: block.prior_hash.clone(),
            hash: block.hash.clone(),
            payload: block.payload.clone(),
            contents: Some(block.contents()),
        }
    }
}

impl From<EntryView> for Block {
    fn from(view: EntryView) -> Self {
        Block {
            index: view.index,
            timestamp: view.timestamp,
            session_id: view.session_id,
            payload: view.payload,
            prior_hash: view.prior_hash,
            hash: view.hash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainExport {
    pub length: usize,
    pub entries: Vec<EntryView>,
}

impl ChainExport {
    pub fn from_chain(chain: &Chain) -> Self {
        Self {
            length: chain.len(),
            entries: chain.blocks().iter().map(EntryView::from).collect(),
        }
    }

    /// Rebuilds a chain. Hashes are not checked here; call
    /// [`Chain::validate`] on the result.
    pub fn into_chain(self) -> Result<Chain> {
        Chain::restore(self.entries.into_iter().map(Block::from).collect())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: String,
    pub balance: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsExport {
    pub collection_account: String,
    pub total: Amount,
    pub accounts: Vec<AccountView>,
}

impl AccountsExport {
    pub fn from_accounts(accounts: &Accounts) -> Self {
        Self {
            collection_account: accounts.collection_account().to_string(),
            total: accounts.total_supply(),
            accounts: accounts
                .iter()
                .map(|(id, balance)| AccountView {
                    id: id.to_string(),
                    balance,
                })
                .collect(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
