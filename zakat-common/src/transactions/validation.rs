use crate::error::{LedgerError, Result};
use crate::transactions::Amount;

/// Stateless checks that do not need to look at any balance.
pub struct TransferValidator;

impl TransferValidator {
    /// Account ids are case-sensitive and otherwise free-form, but must
    /// contain something other than whitespace.
    pub fn validate_account_id(id: &str) -> Result<()> {
        if id.trim().is_empty() {
            return Err(LedgerError::InvalidAccountId(id.to_string()));
        }
        Ok(())
    }

    /// Starting balances may be zero but never negative.
    pub fn validate_opening_balance(balance: Amount) -> Result<()> {
        if balance < Amount::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "opening balance must not be negative, got {}",
                balance
            )));
        }
        Ok(())
    }

    /// Transfer principals must be strictly positive.
    pub fn validate_principal(amount: Amount) -> Result<()> {
        if amount <= Amount::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "transfer amount must be greater than 0, got {}",
                amount
            )));
        }
        Ok(())
    }
}
