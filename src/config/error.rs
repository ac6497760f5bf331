//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Deck size must be between 1 and {max}, got {actual}")]
    InvalidDeckSize { max: usize, actual: usize },

    #[error("Invalid advisor timeout")]
    InvalidTimeout,

    #[error("Advisor base URL must use http or https")]
    InvalidAdvisorUrl,

    #[error("Path for {0} must not be empty")]
    EmptyPath(&'static str),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
