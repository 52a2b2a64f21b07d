use std::collections::BTreeMap;

use zakat_common::error::{LedgerError, Result};
use zakat_common::transactions::{Amount, TransferValidator};

/// Levy collection account used when nothing else is configured.
pub const DEFAULT_COLLECTION_ACCOUNT: &str = "ZAKAT_FUND";

/// Balance store keyed by case-sensitive account id.
///
/// The collection account id is fixed at construction. The account itself is
/// created lazily by the first transfer unless it was opened explicitly.
#[derive(Debug, Clone)]
pub struct Accounts {
    pub(crate) balances: BTreeMap<String, Amount>,
    collection_account: String,
}

impl Default for Accounts {
    fn default() -> Self {
        Self::new(DEFAULT_COLLECTION_ACCOUNT)
    }
}

impl Accounts {
    pub fn new(collection_account: impl Into<String>) -> Self {
        Self {
            balances: BTreeMap::new(),
            collection_account: collection_account.into(),
        }
    }

    /// Opens an account with a starting balance.
    pub fn create_account(&mut self, id: &str, initial_balance: Amount) -> Result<()> {
        TransferValidator::validate_account_id(id)?;
        TransferValidator::validate_opening_balance(initial_balance)?;

        if self.balances.contains_key(id) {
            return Err(LedgerError::DuplicateAccount(id.to_string()));
        }
        self.balances.insert(id.to_string(), initial_balance);
        Ok(())
    }

    pub fn balance(&self, id: &str) -> Option<Amount> {
        self.balances.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.balances.contains_key(id)
    }

    pub fn collection_account(&self) -> &str {
        &self.collection_account
    }

    /// Balance of the collection account, zero before the first levy.
    pub fn collected(&self) -> Amount {
        self.balance(&self.collection_account).unwrap_or(Amount::ZERO)
    }

    /// Sum of every balance. Transfers never change it.
    pub fn total_supply(&self) -> Amount {
        self.balances.values().copied().sum()
    }

    /// Accounts in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.balances.iter().map(|(id, balance)| (id.as_str(), *balance))
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}
