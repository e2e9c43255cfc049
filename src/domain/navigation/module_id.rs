//! The closed set of advisory modules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Language, ValidationError};

/// One of the fixed advisory views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    #[default]
    Dashboard,
    Crops,
    Weather,
    Prices,
    Disease,
    Voice,
    Expert,
}

impl ModuleId {
    pub const ALL: [ModuleId; 7] = [
        ModuleId::Dashboard,
        ModuleId::Crops,
        ModuleId::Weather,
        ModuleId::Prices,
        ModuleId::Disease,
        ModuleId::Voice,
        ModuleId::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Crops => "crops",
            ModuleId::Weather => "weather",
            ModuleId::Prices => "prices",
            ModuleId::Disease => "disease",
            ModuleId::Voice => "voice",
            ModuleId::Expert => "expert",
        }
    }

    /// Navigation label in the given language.
    pub fn label(&self, language: Language) -> String {
        let localized = language.localize(self.as_str());
        if localized == self.as_str() {
            capitalize(localized)
        } else {
            localized.to_string()
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ModuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| ValidationError::unknown_value("module", s))
    }
}
