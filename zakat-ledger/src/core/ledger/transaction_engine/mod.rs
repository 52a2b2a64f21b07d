use std::collections::BTreeMap;

use zakat_common::error::{LedgerError, Result};
use zakat_common::transactions::{Amount, TransferRecord, TransferValidator};
use zakat_common::utils::time::current_time_millis;

use crate::core::ledger::account::Accounts;

pub mod fees;
pub mod validation;

use fees::{exact_add, LevyHandler};
use validation::ValidationHandler;

impl Accounts {
    /// Applies a transfer and its levy as a single unit.
    ///
    /// Pipeline:
    /// 1. stateless checks on the principal
    /// 2. sender and receiver must exist
    /// 3. levy and total debit
    /// 4. sender must cover the total debit
    /// 5. every resulting balance is computed into a staging map
    /// 6. the staging map is written back
    ///
    /// Steps 1-5 never touch `self.balances`, so any error leaves the store
    /// exactly as it was.
    pub fn apply_transfer(&mut self, sender: &str, receiver: &str, amount: Amount) -> Result<TransferRecord> {
        // 1. Stateless validation
        TransferValidator::validate_principal(amount)?;

        // 2. Account resolution
        let available = ValidationHandler::require_account(self, sender)?;
        ValidationHandler::require_account(self, receiver)?;

        // 3. Levy
        let levy = LevyHandler::levy_for(amount)?;
        let total_debit = LevyHandler::total_debit(amount, levy)?;

        // 4. Funds
        ValidationHandler::check_funds(sender, amount, levy, total_debit, available)?;

        // 5. Staging
        let collection = self.collection_account().to_string();
        let staged = self.stage_postings(&[
            (sender, -total_debit),
            (receiver, amount),
            (collection.as_str(), levy),
        ])?;

        // 6. Commit
        if !self.contains(&collection) {
            tracing::info!("Opening collection account {}", collection);
        }
        self.balances.extend(staged);

        tracing::debug!(
            "Transfer applied: {} -> {} | amount {} | levy {} | debit {}",
            sender, receiver, amount, levy, total_debit
        );

        Ok(TransferRecord {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            amount,
            levy,
            total_debit,
            collection_account: collection,
            timestamp: current_time_millis(),
        })
    }

    /// Folds signed deltas into the resulting balances without writing them.
    ///
    /// Deltas for the same account accumulate, so a sender that is also the
    /// receiver or the collection account nets out correctly. Missing
    /// accounts start from zero.
    fn stage_postings(&self, deltas: &[(&str, Amount)]) -> Result<BTreeMap<String, Amount>> {
        let mut staged: BTreeMap<String, Amount> = BTreeMap::new();

        for (account, delta) in deltas {
            let current = staged
                .get(*account)
                .copied()
                .or_else(|| self.balance(account))
                .unwrap_or(Amount::ZERO);
            let next = exact_add(current, *delta).ok_or_else(|| {
                LedgerError::InvalidAmount(format!("balance of {} cannot hold {} exactly", account, delta))
            })?;
            staged.insert(account.to_string(), next);
        }

        Ok(staged)
    }
}
