use zakat_common::error::Result;
use zakat_common::genesis::GenesisState;
use zakat_common::transactions::{Amount, TransferRecord, TransferValidator};

use crate::core::batch::{BatchCoordinator, CommitReceipt};
use crate::core::chain::{Chain, ValidationReport};
use crate::core::ledger::Accounts;
use crate::interface::export::{AccountsExport, ChainExport};

/// Everything one front-end drives: the chain, the balances and the pending
/// batch, bound to a session identifier.
///
/// Front-ends own a `LedgerSession` and pass it around explicitly; mutating
/// operations take `&mut self`, which is the single-writer boundary.
#[derive(Debug)]
pub struct LedgerSession {
    session_id: String,
    chain: Chain,
    accounts: Accounts,
    batch: BatchCoordinator,
}

impl LedgerSession {
    pub fn new(session_id: impl Into<String>, collection_account: &str) -> Result<Self> {
        TransferValidator::validate_account_id(collection_account)?;

        let session_id = session_id.into();
        let chain = Chain::initialize(&session_id);
        tracing::info!(
            "Session {} started | collection account {} | genesis {}",
            session_id,
            collection_account,
            chain.genesis().hash
        );

        Ok(Self {
            session_id,
            chain,
            accounts: Accounts::new(collection_account),
            batch: BatchCoordinator::new(),
        })
    }

    /// Starts a session and opens the genesis allocations.
    pub fn with_genesis(
        session_id: impl Into<String>,
        collection_account: &str,
        genesis: &GenesisState,
    ) -> Result<Self> {
        let mut session = Self::new(session_id, collection_account)?;
        let opened = session.accounts.apply_genesis_state(genesis)?;
        tracing::info!("Opened {} genesis accounts", opened);
        Ok(session)
    }

    pub fn create_account(&mut self, id: &str, initial_balance: Amount) -> Result<()> {
        self.accounts.create_account(id, initial_balance)?;
        tracing::info!("Account {} created with balance {}", id, initial_balance);
        Ok(())
    }

    /// Applies a transfer and queues its record for the next commit.
    ///
    /// Nothing is queued when the transfer is rejected.
    pub fn transfer(&mut self, sender: &str, receiver: &str, amount: Amount) -> Result<TransferRecord> {
        let record = self.accounts.apply_transfer(sender, receiver, amount)?;
        self.batch.record_pending(record.clone());
        tracing::info!(
            "Transfer queued: {} | levy {} | total {}",
            record.main_leg(),
            record.levy,
            record.total_debit
        );
        Ok(record)
    }

    /// Seals the pending transfers under this session's id.
    pub fn commit(&mut self) -> Result<CommitReceipt> {
        self.batch.commit(&mut self.chain, &self.session_id)
    }

    pub fn validate(&self) -> Result<()> {
        self.chain.validate()
    }

    pub fn audit(&self) -> ValidationReport {
        self.chain.audit()
    }

    pub fn balance(&self, id: &str) -> Option<Amount> {
        self.accounts.balance(id)
    }

    pub fn export_chain(&self) -> ChainExport {
        ChainExport::from_chain(&self.chain)
    }

    pub fn export_accounts(&self) -> AccountsExport {
        AccountsExport::from_accounts(&self.accounts)
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn pending(&self) -> &[TransferRecord] {
        self.batch.pending()
    }
}
