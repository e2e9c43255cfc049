//! Application-level settings

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Language;

/// UI language and log filter
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    /// Initial UI language (`en` or `hi`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppSettings {
    /// Parsed language setting
    pub fn language(&self) -> Result<Language, ValidationError> {
        self.language
            .parse()
            .map_err(|_| ValidationError::InvalidLanguage(self.language.clone()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.language().map(|_| ())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            log_level: default_log_level(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_log_level() -> String {
    "info,farm_advisor=debug".to_string()
}
