use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "zakat-node")]
#[command(about = "Hash-chained transfer ledger with a 2.5% zakat levy", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample config if none exists
    Init {
        #[arg(short, long, default_value = "config.json")]
        config: String,
        #[arg(long, default_value = "logs")]
        log_dir: String,
    },
    /// Replay a JSON operation script against a fresh session and export the result
    Run {
        #[arg(short, long, default_value = "config.json")]
        config: String,
        #[arg(short, long)]
        script: String,
        /// Overrides `export_dir` from the config
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Restore an exported chain and print its audit report
    Verify {
        #[arg(long)]
        chain: String,
        #[arg(long, default_value = "logs")]
        log_dir: String,
    },
}
