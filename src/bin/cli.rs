//! Receipt Processor CLI
//!
//! Offline scoring and configuration checks. For the HTTP API, use
//! `receipt-server`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use receipt_processor::{
    config,
    error::Result,
    models::{Config, ReceiptRequest},
    services::RulesCalculator,
    utils::{ConfigReport, ReceiptReport},
};

/// receipt-processor - score purchase receipts
#[derive(Parser, Debug)]
#[command(name = "receipt-processor", version, about = "Score purchase receipts")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a receipt JSON file and print the per-rule breakdown
    Score {
        /// Receipt JSON file, in the same shape as the HTTP request body
        file: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Show the effective configuration
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn score(path: &Path) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let receipt = ReceiptRequest::from_json(&bytes)?.into_receipt()?;
    log::debug!("Loaded receipt from {}", path.display());

    let breakdown = RulesCalculator::new().breakdown(&receipt)?;
    print!("{}", ReceiptReport::new(&receipt, &breakdown));
    log::info!("{} scored {} points", path.display(), breakdown.total());
    Ok(())
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Score { file } => {
            if let Err(e) = score(&file) {
                log::error!("Could not score {}: {}", file.display(), e);
                return Err(e);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            let config = Config::load(&cli.config)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {e}");
                return Err(e);
            }
            log::info!("{} OK", cli.config.display());
        }

        Command::Info => {
            let config = config::load_config(&cli.config)?;
            print!("{}", ConfigReport::new(&cli.config, &config));
        }
    }

    Ok(())
}
