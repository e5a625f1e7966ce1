//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Spending suggestions and budget reports
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Expense analysis service and command-line reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (TOML)
    ///
    /// Defaults to the user config directory (tally/config.toml) when it
    /// exists, otherwise the built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,
    },

    /// Print spending suggestions for an expense file
    Suggest {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print a budget report for an expense file
    Report {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Budget file (.json); overrides budgets embedded in the expense file
        #[arg(short, long)]
        budgets: Option<PathBuf>,

        /// Only count expenses from the current month
        #[arg(long)]
        monthly: bool,
    },

    /// Print the month-to-date status of one category's budget
    BudgetStatus {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Budget file (.json); overrides budgets embedded in the expense file
        #[arg(short, long)]
        budgets: Option<PathBuf>,

        /// Category to check (exact match)
        #[arg(short, long)]
        category: String,
    },

    /// Print the month-to-date dashboard summary
    Dashboard {
        /// Expense file (.json or .csv)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the resolved configuration
    Config,
}
