//! Tally CLI - Spending suggestions and budget reports
//!
//! Usage:
//!   tally serve --port 8000                 Start the HTTP API
//!   tally suggest --file expenses.json      Print suggestions
//!   tally report --file expenses.csv --budgets budgets.json
//!   tally dashboard --file expenses.json    Month-to-date summary

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use tally_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, host } => {
            commands::cmd_serve(&config, host.as_deref(), port).await
        }
        Commands::Suggest { file } => commands::cmd_suggest(&config, &file),
        Commands::Report {
            file,
            budgets,
            monthly,
        } => commands::cmd_report(&file, budgets.as_deref(), monthly),
        Commands::BudgetStatus {
            file,
            budgets,
            category,
        } => commands::cmd_budget_status(&config, &file, budgets.as_deref(), &category),
        Commands::Dashboard { file } => commands::cmd_dashboard(&file),
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref()),
    }
}
