use std::{fs, io, path::Path};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use zakat_common::error::Result;
use zakat_common::genesis::GenesisState;
use zakat_ledger::{LedgerSession, DEFAULT_COLLECTION_ACCOUNT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Batch/session identifier stamped on every entry. A random one is
    /// generated per run when absent.
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default = "default_collection_account")]
    pub collection_account: String,
    #[serde(default)]
    pub genesis: GenesisState,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_collection_account() -> String {
    DEFAULT_COLLECTION_ACCOUNT.to_string()
}

fn default_export_dir() -> String {
    "data/export".to_string()
}

fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_id: None,
            collection_account: default_collection_account(),
            genesis: GenesisState::new(),
            export_dir: default_export_dir(),
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Config written by `init`: two demo accounts and a fixed session id.
    pub fn sample() -> Self {
        Self {
            session_id: Some("0000".to_string()),
            genesis: GenesisState::new()
                .with_allocation("alice", Decimal::from(1000))
                .with_allocation("bob", Decimal::ZERO),
            ..Self::default()
        }
    }

    pub fn resolve_session_id(&self) -> String {
        match &self.session_id {
            Some(id) => id.clone(),
            None => uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Starts a session with the configured collection account and genesis
    /// allocations.
    pub fn build_session(&self) -> Result<LedgerSession> {
        LedgerSession::with_genesis(self.resolve_session_id(), &self.collection_account, &self.genesis)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        fs::write(path, json)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        let parsed = serde_json::from_str::<Config>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(parsed)
    }
}
