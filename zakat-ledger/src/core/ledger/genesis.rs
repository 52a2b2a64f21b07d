use zakat_common::error::Result;
use zakat_common::genesis::GenesisState;

use super::account::Accounts;

impl Accounts {
    /// Opens every genesis allocation, in id order.
    ///
    /// Stops at the first rejected allocation; accounts opened before it stay.
    pub fn apply_genesis_state(&mut self, genesis: &GenesisState) -> Result<usize> {
        for (account, balance) in &genesis.allocations {
            self.create_account(account, *balance)?;
            tracing::debug!("Genesis allocation: {} = {}", account, balance);
        }
        Ok(genesis.allocations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use zakat_common::error::LedgerError;

    #[test]
    fn test_apply_genesis_state() {
        let genesis = GenesisState::new()
            .with_allocation("A", dec!(1000))
            .with_allocation("B", dec!(0));

        let mut accounts = Accounts::default();
        assert_eq!(accounts.apply_genesis_state(&genesis).unwrap(), 2);
        assert_eq!(accounts.balance("A"), Some(dec!(1000)));
        assert_eq!(accounts.balance("B"), Some(dec!(0)));
    }

    #[test]
    fn test_genesis_rejects_negative_allocation() {
        let genesis = GenesisState::new().with_allocation("A", dec!(-3));
        let mut accounts = Accounts::default();
        assert!(matches!(
            accounts.apply_genesis_state(&genesis),
            Err(LedgerError::InvalidAmount(_))
        ));
    }
}
