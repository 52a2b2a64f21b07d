use std::path::Path;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Writes the sample config to `path` unless a file is already there.
/// Returns `true` when a new file was written.
pub fn ensure_config(path: &str) -> Result<bool, Box<dyn std::error::Error>> {
    if Path::new(path).exists() {
        info!("Config already present at {}", path);
        return Ok(false);
    }

    info!("Config not found. Writing default to {}...", path);
    Config::sample().save_to_file(path)?;
    info!("Config written to {}", path);
    Ok(true)
}

/// Installs the global subscriber: ledger events go to `<log_dir>/audit-<name>.log`,
/// everything else to stdout under `RUST_LOG` (default `info,zakat_node=debug`).
///
/// Keep the returned guard alive for the whole run or buffered audit lines are lost.
pub fn init_tracing(log_dir: &str, name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, format!("audit-{}.log", name));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let audit_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
            metadata.target().starts_with("zakat_ledger") || metadata.target().starts_with("zakat_node")
        }));

    let stdout_layer = tracing_subscriber::fmt::layer().with_filter(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,zakat_node=debug".into()),
    );

    tracing_subscriber::registry()
        .with(audit_layer)
        .with(stdout_layer)
        .init();

    guard
}
