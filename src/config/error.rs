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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),

    #[error("Invalid dataset URL format")]
    InvalidDatasetUrl,

    #[error("Invalid dataset timeout")]
    InvalidDatasetTimeout,

    #[error("Simulated delay '{0}' must be between 1 and 9999 ms")]
    InvalidDelay(&'static str),

    #[error("Period '{0}' must be greater than zero")]
    InvalidPeriod(&'static str),
}
