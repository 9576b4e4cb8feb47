//! Error types for configuration loading and display output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or validating the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid keypad layout: {reason}")]
    InvalidLayout { reason: String },
}

/// Errors from drawing the display.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Failed to write display frame: {0}")]
    Io(#[from] std::io::Error),
}
