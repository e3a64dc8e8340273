//! Operator CLI for the customer registry.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

use clap::Parser;
use persistence::repositories::CustomerRepository;
use serde_json::Value;
use std::process::ExitCode;
use tracing::{error, info};

use crate::commands::Command;
use crate::error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "customer-registry",
    about = "Manage customers and their phone numbers",
    long_about = "Create, change, delete and look up customers and their phone numbers in PostgreSQL.",
    after_help = "Examples:\n  customer-registry add-customer --first-name Maria --last-name Plotnikova --email mary@example.com\n  customer-registry add-phone --customer-id 1 --phone 9321436823\n  customer-registry find --first-name Maria"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Parse arguments, execute the command and print its JSON result.
pub async fn run() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

async fn execute(cli: Cli) -> Result<Value, CliError> {
    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting customer registry v{}", env!("CARGO_PKG_VERSION"));

    let pool = persistence::db::create_pool(&config.database.to_pool_config()).await?;
    let repo = CustomerRepository::new(pool.clone());
    repo.ensure_schema().await?;

    let result = commands::execute(&repo, cli.command).await;

    persistence::metrics::record_pool_metrics(&pool);
    pool.close().await;
    result
}
