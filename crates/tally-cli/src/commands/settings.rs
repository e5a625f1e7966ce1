//! Configuration display

use std::path::Path;

use anyhow::Result;

use tally_core::config::default_config_path;
use tally_core::Config;

/// Describe where the active configuration came from
pub fn config_source(explicit: Option<&Path>) -> String {
    if let Some(path) = explicit {
        return path.display().to_string();
    }
    match default_config_path() {
        Some(path) if path.exists() => path.display().to_string(),
        _ => "built-in defaults".to_string(),
    }
}

pub fn cmd_config(config: &Config, explicit: Option<&Path>) -> Result<()> {
    println!("# Source: {}", config_source(explicit));
    print!("{}", config.to_toml()?);
    Ok(())
}
