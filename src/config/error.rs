//! Configuration error types

use thiserror::Error;

use crate::domain::foundation::CycleError;

/// Errors that can occur while loading or building a cycle definition
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration parsing failed: {0}")]
    Parse(String),

    #[error("Invalid cycle definition: {0}")]
    Cycle(#[from] CycleError),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
