//! Configuration for Tally
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path (`--config`), or the user override in the platform
//!    config dir (~/.config/tally/config.toml) when it exists
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Every key is optional; missing keys keep their default value.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Longest accepted suggestion window (about a century)
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tally.toml");

/// Thresholds used by the suggestion engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Trailing window (days) that all suggestions look at
    pub window_days: i64,
    /// Records older than this many days form the "previous" period
    pub recent_days: i64,
    /// Reduction proposed for the top category, in percent
    pub reduction_percent: u32,
    /// Category watched for spending spikes (exact match)
    pub spike_category: String,
    /// Current spend must exceed previous spend times this ratio
    pub spike_ratio: f64,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            recent_days: 15,
            reduction_percent: 15,
            spike_category: "Travel".to_string(),
            spike_ratio: 1.2,
        }
    }
}

/// Thresholds for month-to-date budget status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Fraction of the limit at which a budget turns to "warning"
    pub warning_ratio: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self { warning_ratio: 0.8 }
    }
}

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Full Tally configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggestions: SuggestionConfig,
    pub budgets: BudgetConfig,
    pub server: ServerSettings,
}

impl Config {
    /// Load configuration (explicit path, then user override, then defaults)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                debug!(path = %path.display(), "Loading config");
                fs::read_to_string(path)?
            }
            None => match default_config_path().filter(|p| p.exists()) {
                Some(default_path) => {
                    debug!(path = %default_path.display(), "Loading user config");
                    fs::read_to_string(&default_path)?
                }
                None => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::parse(&content)
    }

    /// Parse and validate a TOML document
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        let s = &self.suggestions;
        if s.window_days <= 0 || s.window_days > MAX_WINDOW_DAYS {
            return Err(Error::Config(format!(
                "suggestions.window_days must be between 1 and {}",
                MAX_WINDOW_DAYS
            )));
        }
        if s.recent_days < 0 || s.recent_days > s.window_days {
            return Err(Error::Config(
                "suggestions.recent_days must be between 0 and window_days".into(),
            ));
        }
        if !s.spike_ratio.is_finite() || s.spike_ratio < 0.0 {
            return Err(Error::Config("suggestions.spike_ratio must be >= 0".into()));
        }
        let w = self.budgets.warning_ratio;
        if !(w > 0.0 && w <= 1.0) {
            return Err(Error::Config("budgets.warning_ratio must be in (0, 1]".into()));
        }
        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tally").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [suggestions]
            spike_category = "Flights"

            [server]
            port = 9000
        "#,
        )
        .unwrap();

        assert_eq!(config.suggestions.spike_category, "Flights");
        assert_eq!(config.suggestions.window_days, 30);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.budgets.warning_ratio, 0.8);
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::parse("[suggestions]\nwindow_days = 0").is_err());
        assert!(Config::parse("[suggestions]\nrecent_days = 45").is_err());
        assert!(matches!(
            Config::parse("[suggestions]\nwindow_days = 1000000000\nrecent_days = 15"),
            Err(Error::Config(_))
        ));
        assert!(Config::parse("[suggestions]\nwindow_days = 36500").is_ok());
        assert!(Config::parse("[suggestions]\nspike_ratio = -1.0").is_err());
        assert!(Config::parse("[budgets]\nwarning_ratio = 1.5").is_err());
        assert!(Config::parse("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[budgets]\nwarning_ratio = 0.5").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.budgets.warning_ratio, 0.5);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/tally.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_to_toml_round_trip() {
        let config = Config::default();
        let rendered = config.to_toml().unwrap();
        assert_eq!(Config::parse(&rendered).unwrap(), config);
    }
}
