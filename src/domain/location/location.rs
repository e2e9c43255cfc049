//! The user's location value.

use serde::{Deserialize, Serialize};

/// District id stored when the user picks only a state.
pub const MAIN_DISTRICT: &str = "main-district";

/// Label shown in place of [`MAIN_DISTRICT`].
pub const MAIN_AREA_LABEL: &str = "Main Area";

/// Derives a district id from its display name by case-folding.
pub fn district_id(display_name: &str) -> String {
    display_name.trim().to_lowercase()
}

/// Selected state and district ids; either may be empty while setting up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub state: String,
    pub district: String,
}

impl Location {
    pub fn new(state: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
        }
    }

    /// A location is complete once a state is chosen.
    pub fn is_complete(&self) -> bool {
        !self.state.trim().is_empty()
    }

    pub fn is_main_district(&self) -> bool {
        self.district == MAIN_DISTRICT
    }
}

/// Human-readable location for the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDisplay {
    pub state: String,
    pub district: String,
}

impl LocationDisplay {
    /// "District, State".
    pub fn label(&self) -> String {
        format!("{}, {}", self.district, self.state)
    }
}
