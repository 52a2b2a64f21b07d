use clap::Parser;
use tracing::{error, info, warn};
use zakat_node::{
    cli::{Cli, Commands},
    config::Config,
    export::{verify_chain_file, write_exports},
    script::{load_script, run_script},
    setup::{ensure_config, init_tracing},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { config, log_dir } => {
            let _guard = init_tracing(&log_dir, "init");
            ensure_config(&config)?;
        }
        Commands::Run { config, script, out } => {
            let cfg = Config::load_from_file(&config)?;
            let _guard = init_tracing(&cfg.log_dir, "run");

            info!("--- ZAKAT LEDGER RUN ---");
            info!("Config: {}", config);
            info!("Script: {}", script);

            let ops = load_script(&script)?;
            let mut session = cfg.build_session()?;
            let summary = run_script(&mut session, &ops);

            if !session.pending().is_empty() {
                warn!("{} transfers left uncommitted", session.pending().len());
            }

            let export_dir = out.unwrap_or_else(|| cfg.export_dir.clone());
            write_exports(&session, &export_dir)?;

            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Verify { chain, log_dir } => {
            let _guard = init_tracing(&log_dir, "verify");
            let report = verify_chain_file(&chain)?;

            if report.is_valid() {
                info!("Chain {} valid ({} entries)", chain, report.length);
            } else {
                for failure in &report.failures {
                    error!("Entry {} failed: {}", failure.index, failure.reason);
                }
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
