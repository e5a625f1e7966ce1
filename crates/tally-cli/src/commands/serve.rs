//! Server command implementation

use anyhow::{Context, Result};

use tally_core::Config;
use tally_server::{parse_allowed_origins, ServerConfig};

pub async fn cmd_serve(config: &Config, host: Option<&str>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or(config.server.host.as_str());
    let port = port.unwrap_or(config.server.port);

    // Parse allowed CORS origins from environment (comma-separated)
    let allowed_origins =
        parse_allowed_origins(&std::env::var("TALLY_ALLOWED_ORIGINS").unwrap_or_default());

    println!("🚀 Starting Tally API server...");
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Suggestion window: {} days (spike check on {})",
        config.suggestions.window_days, config.suggestions.spike_category
    );
    if allowed_origins.is_empty() {
        println!("   CORS: same-origin only");
    } else {
        println!("   CORS origins: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let server_config = ServerConfig::from_config(config, allowed_origins);
    tally_server::serve(host, port, server_config)
        .await
        .context("Server error")
}
