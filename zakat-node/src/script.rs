//! Operation scripts: a JSON array of ledger operations replayed in order
//! against one session.
//!
//! ```json
//! [
//!   { "op": "create_account", "id": "carol", "balance": "50" },
//!   { "op": "transfer", "from": "alice", "to": "bob", "amount": "100" },
//!   { "op": "commit" },
//!   { "op": "validate" }
//! ]
//! ```
//!
//! A failing operation is logged and counted; the run continues with the next one.

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zakat_common::error::{LedgerError, Result};
use zakat_ledger::LedgerSession;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    CreateAccount {
        id: String,
        #[serde(default)]
        balance: Decimal,
    },
    Transfer {
        from: String,
        to: String,
        amount: Decimal,
    },
    Commit,
    Validate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub applied: usize,
    pub failed: usize,
    pub commits: usize,
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptOp>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn apply(session: &mut LedgerSession, op: &ScriptOp) -> Result<String> {
    match op {
        ScriptOp::CreateAccount { id, balance } => {
            session.create_account(id, *balance)?;
            Ok(format!("account {} opened with {}", id, balance))
        }
        ScriptOp::Transfer { from, to, amount } => {
            let record = session.transfer(from, to, *amount)?;
            Ok(format!("{} | {}", record.main_leg(), record.levy_leg()))
        }
        ScriptOp::Commit => {
            let receipt = session.commit()?;
            Ok(format!(
                "entry {} sealed with {} transfers ({})",
                receipt.chain_length - 1,
                receipt.committed,
                receipt.block_hash
            ))
        }
        ScriptOp::Validate => {
            session.validate()?;
            Ok(format!("chain valid ({} entries)", session.chain().len()))
        }
    }
}

pub fn run_script(session: &mut LedgerSession, ops: &[ScriptOp]) -> RunSummary {
    let mut summary = RunSummary::default();

    for (step, op) in ops.iter().enumerate() {
        match apply(session, op) {
            Ok(outcome) => {
                summary.applied += 1;
                if matches!(op, ScriptOp::Commit) {
                    summary.commits += 1;
                }
                info!("[{}] {}", step, outcome);
            }
            Err(LedgerError::EmptyBatch) => {
                summary.failed += 1;
                warn!("[{}] nothing to commit", step);
            }
            Err(e) => {
                summary.failed += 1;
                warn!("[{}] rejected: {}", step, e);
            }
        }
    }

    info!(
        "Script done: {} applied, {} failed, {} commits",
        summary.applied, summary.failed, summary.commits
    );
    summary
}
