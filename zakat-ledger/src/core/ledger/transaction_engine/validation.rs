use zakat_common::error::{LedgerError, Result};
use zakat_common::transactions::Amount;

use crate::core::ledger::account::Accounts;

/// Checks that need the current balances.
pub struct ValidationHandler;

impl ValidationHandler {
    /// Returns the current balance of an existing account.
    pub fn require_account(accounts: &Accounts, id: &str) -> Result<Amount> {
        accounts
            .balance(id)
            .ok_or_else(|| LedgerError::UnknownAccount(id.to_string()))
    }

    /// Fails when `available` cannot cover principal plus levy.
    pub fn check_funds(
        account: &str,
        principal: Amount,
        levy: Amount,
        required: Amount,
        available: Amount,
    ) -> Result<()> {
        if available < required {
            tracing::debug!(
                "Insufficient funds: {} has {}, needs {} ({} + {})",
                account, available, required, principal, levy
            );
            return Err(LedgerError::InsufficientBalance {
                account: account.to_string(),
                principal,
                levy,
                required,
                available,
                shortfall: required - available,
            });
        }
        Ok(())
    }
}
