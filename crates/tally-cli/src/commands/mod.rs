//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - Suggestions, reports, budget status and dashboard
//! - `input` - Reading expense and budget files
//! - `serve` - Web server command
//! - `settings` - Configuration display

pub mod analyze;
pub mod input;
pub mod serve;
pub mod settings;

// Re-export command functions for main.rs
pub use analyze::*;
pub use serve::*;
pub use settings::*;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
