use std::io;
use thiserror::Error;

/// Custom error type for the AquaFlow application
#[derive(Error, Debug)]
pub enum AquaError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned HTTP {status}")]
    Http { status: u16 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TUI error: {0}")]
    Tui(String),
}

/// Result type alias for the AquaFlow application
pub type Result<T> = std::result::Result<T, AquaError>;

impl AquaError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AquaError::Config(msg.into())
    }

    /// Create a TUI error
    pub fn tui<S: Into<String>>(msg: S) -> Self {
        AquaError::Tui(msg.into())
    }

    /// Poll failures are transient: the next scheduled poll is the retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AquaError::Network(_) | AquaError::Http { .. })
    }
}
