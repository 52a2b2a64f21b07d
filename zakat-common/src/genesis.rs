use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::transactions::Amount;

/// Accounts that exist before the first transfer of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Initial allocations: account id -> opening balance.
    #[serde(default)]
    pub allocations: BTreeMap<String, Amount>,
}

impl GenesisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allocation(mut self, account: impl Into<String>, balance: Amount) -> Self {
        self.allocations.insert(account.into(), balance);
        self
    }
}
