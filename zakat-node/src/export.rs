use std::{fs, path::{Path, PathBuf}};

use tracing::info;
use zakat_common::error::Result;
use zakat_ledger::{ChainExport, LedgerSession, ValidationReport};

pub const CHAIN_FILE: &str = "chain.json";
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Writes `chain.json` and `accounts.json` into `dir`, creating it if needed.
pub fn write_exports<P: AsRef<Path>>(session: &LedgerSession, dir: P) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let chain_path = dir.join(CHAIN_FILE);
    fs::write(&chain_path, session.export_chain().to_json_pretty()?)?;

    let accounts_path = dir.join(ACCOUNTS_FILE);
    fs::write(&accounts_path, session.export_accounts().to_json_pretty()?)?;

    info!("Exported {} and {}", chain_path.display(), accounts_path.display());
    Ok((chain_path, accounts_path))
}

/// Restores an exported chain file and audits every link.
pub fn verify_chain_file<P: AsRef<Path>>(path: P) -> Result<ValidationReport> {
    let data = fs::read_to_string(path)?;
    let chain = ChainExport::from_json(&data)?.into_chain()?;
    Ok(chain.audit())
}
