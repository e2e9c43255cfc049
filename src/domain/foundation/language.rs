//! UI language setting and the small localisation table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Language the interface (and spoken answers) use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// Short code used in configuration and by the console.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// BCP-47 tag handed to the speech-output collaborator.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }

    /// Looks up a navigation label; unknown keys come back unchanged.
    pub fn localize<'a>(&self, key: &'a str) -> &'a str {
        let translated = match (self, key) {
            (Language::English, "dashboard") => "Dashboard",
            (Language::English, "crops") => "Crops",
            (Language::English, "prices") => "Prices",
            (Language::English, "expert") => "Expert",
            (Language::Hindi, "dashboard") => "डैशबोर्ड",
            (Language::Hindi, "crops") => "फसलें",
            (Language::Hindi, "prices") => "कीमतें",
            (Language::Hindi, "expert") => "विशेषज्ञ",
            _ => return key,
        };
        translated
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "hi" => Ok(Language::Hindi),
            other => Err(ValidationError::unknown_value("language", other)),
        }
    }
}
