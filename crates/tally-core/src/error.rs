//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required top-level key was absent from the request payload
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error was caused by the caller's input rather than a fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingField(_) | Error::InvalidData(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
