//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FARM_ADVISOR` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup
//! that runs on the compiled-in crop dataset.
//!
//! # Example
//!
//! ```no_run
//! use farm_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Voice delay: {:?}", config.timing.voice_delay());
//! ```

mod app;
mod dataset;
mod error;
mod timing;

pub use app::AppSettings;
pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use timing::TimingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Language and logging
    #[serde(default)]
    pub app: AppSettings,

    /// Crop dataset source
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Simulated delays and scheduler periods
    #[serde(default)]
    pub timing: TimingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FARM_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FARM_ADVISOR__APP__LANGUAGE=hi` -> `app.language = "hi"`
    /// - `FARM_ADVISOR__TIMING__VOICE_MS=2500` -> `timing.voice_ms = 2500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FARM_ADVISOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.dataset.validate()?;
        self.timing.validate()?;
        Ok(())
    }
}
