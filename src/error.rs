use std::io;
use thiserror::Error;

/// Message carried by every refused pub entry.
pub const UNDERAGE_MESSAGE: &str = "Consuming Alcohol is not permitted under 18 years old";

/// Errors raised by the drills.
///
/// `Underage` is the only domain validation failure; everything else wraps
/// the outside world (files, HTTP, configuration).
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("{}", UNDERAGE_MESSAGE)]
    Underage { age: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DrillError {
    pub fn is_underage(&self) -> bool {
        matches!(self, DrillError::Underage { .. })
    }
}

impl From<toml::de::Error> for DrillError {
    fn from(err: toml::de::Error) -> Self {
        DrillError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
