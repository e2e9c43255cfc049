//! Resolves states to districts and normalizes user selections.

use serde::{Deserialize, Serialize};

use super::catalog::LocationCatalog;
use super::location::{district_id, Location, LocationDisplay, MAIN_AREA_LABEL, MAIN_DISTRICT};
use crate::domain::foundation::ValidationError;

/// District choice offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictOption {
    pub id: String,
    pub name: String,
}

/// Two-level state/district lookup over the static catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationResolver {
    catalog: LocationCatalog,
}

impl LocationResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Ordered district names for a state; empty for unknown states.
    pub fn districts_for(&self, state_id: &str) -> Vec<&'static str> {
        self.catalog
            .state(state_id)
            .map(|entry| entry.districts.to_vec())
            .unwrap_or_default()
    }

    /// District names paired with their derived ids.
    pub fn district_options(&self, state_id: &str) -> Vec<DistrictOption> {
        self.districts_for(state_id)
            .into_iter()
            .map(|name| DistrictOption {
                id: district_id(name),
                name: name.to_string(),
            })
            .collect()
    }

    pub fn validate(&self, state_id: &str) -> bool {
        self.catalog.state(state_id).is_some()
    }

    /// Builds a canonical location. An empty district becomes the sentinel.
    ///
    /// # Errors
    ///
    /// - `EmptyField("state")` when no state is selected
    /// - `UnknownValue` for a state outside the catalog or a district that
    ///   does not belong to the state
    pub fn normalize(&self, state_id: &str, district: &str) -> Result<Location, ValidationError> {
        let state_id = state_id.trim();
        if state_id.is_empty() {
            return Err(ValidationError::empty_field("state"));
        }
        let entry = self
            .catalog
            .state(state_id)
            .ok_or_else(|| ValidationError::unknown_value("state", state_id))?;

        let district = district_id(district);
        if district.is_empty() || district == MAIN_DISTRICT {
            return Ok(Location::new(entry.id, MAIN_DISTRICT));
        }

        if entry.districts.iter().any(|name| district_id(name) == district) {
            Ok(Location::new(entry.id, district))
        } else {
            Err(ValidationError::unknown_value("district", district))
        }
    }

    /// Display strings for a location; the sentinel renders as "Main Area".
    pub fn display(&self, location: &Location) -> LocationDisplay {
        let state = self.catalog.state_name(&location.state).to_string();
        let district = if location.is_main_district() || location.district.is_empty() {
            MAIN_AREA_LABEL.to_string()
        } else {
            self.catalog
                .state(&location.state)
                .and_then(|entry| {
                    entry
                        .districts
                        .iter()
                        .find(|name| district_id(name) == location.district)
                })
                .map(|name| name.to_string())
                .unwrap_or_else(|| location.district.clone())
        };
        LocationDisplay { state, district }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn districts_for_known_state_are_ordered() {
        let resolver = LocationResolver::new();
        assert_eq!(
            resolver.districts_for("punjab"),
            vec!["Amritsar", "Ludhiana", "Jalandhar", "Patiala"]
        );
    }

    #[test]
    fn districts_for_unknown_state_is_empty() {
        assert!(LocationResolver::new().districts_for("atlantis").is_empty());
        assert!(LocationResolver::new().districts_for("").is_empty());
    }

    #[test]
    fn district_options_derive_ids() {
        let options = LocationResolver::new().district_options("wb");
        assert_eq!(options[0].id, "kolkata");
        assert_eq!(options[0].name, "Kolkata");
    }

    #[test]
    fn validate_checks_catalog() {
        let resolver = LocationResolver::new();
        assert!(resolver.validate("telangana"));
        assert!(!resolver.validate("Telangana"));
        assert!(!resolver.validate(""));
    }

    #[test]
    fn normalize_without_district_uses_sentinel() {
        let location = LocationResolver::new().normalize("punjab", "").unwrap();
        assert_eq!(location, Location::new("punjab", MAIN_DISTRICT));
    }

    #[test]
    fn normalize_requires_state() {
        assert_eq!(
            LocationResolver::new().normalize("", "ludhiana"),
            Err(ValidationError::empty_field("state"))
        );
    }

    #[test]
    fn normalize_rejects_unknown_state() {
        assert!(LocationResolver::new().normalize("atlantis", "").is_err());
    }

    #[test]
    fn normalize_folds_district_names() {
        let location = LocationResolver::new().normalize("punjab", "Ludhiana").unwrap();
        assert_eq!(location.district, "ludhiana");
    }

    #[test]
    fn normalize_rejects_foreign_district() {
        let err = LocationResolver::new().normalize("punjab", "pune").unwrap_err();
        assert_eq!(err, ValidationError::unknown_value("district", "pune"));
    }

    #[test]
    fn display_renders_sentinel_as_main_area() {
        let resolver = LocationResolver::new();
        let location = resolver.normalize("punjab", "").unwrap();
        let display = resolver.display(&location);
        assert_eq!(display.district, "Main Area");
        assert_eq!(display.label(), "Main Area, Punjab");
    }

    #[test]
    fn display_uses_district_name() {
        let resolver = LocationResolver::new();
        let location = resolver.normalize("up", "varanasi").unwrap();
        assert_eq!(resolver.display(&location).label(), "Varanasi, Uttar Pradesh");
    }

    proptest! {
        #[test]
        fn district_ids_are_stable(index in 0usize..8) {
            let resolver = LocationResolver::new();
            let state = resolver.catalog().states()[index].id;
            let first = resolver.district_options(state);
            let second = resolver.district_options(state);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(&first, &second);
            for option in &first {
                let location = resolver.normalize(state, &option.name).unwrap();
                prop_assert_eq!(&location.district, &option.id);
            }
        }
    }
}
