//! Compiled-in state and district catalog.

/// One state with its display name and ordered districts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

const STATES: &[StateEntry] = &[
    StateEntry {
        id: "punjab",
        name: "Punjab",
        districts: &["Amritsar", "Ludhiana", "Jalandhar", "Patiala"],
    },
    StateEntry {
        id: "up",
        name: "Uttar Pradesh",
        districts: &["Lucknow", "Kanpur", "Agra", "Varanasi"],
    },
    StateEntry {
        id: "bihar",
        name: "Bihar",
        districts: &["Patna", "Gaya", "Muzaffarpur", "Bhagalpur"],
    },
    StateEntry {
        id: "wb",
        name: "West Bengal",
        districts: &["Kolkata", "Hooghly", "Bardhaman", "Murshidabad"],
    },
    StateEntry {
        id: "gujarat",
        name: "Gujarat",
        districts: &["Ahmedabad", "Surat", "Vadodara", "Rajkot"],
    },
    StateEntry {
        id: "maharashtra",
        name: "Maharashtra",
        districts: &["Mumbai", "Pune", "Nagpur", "Nashik"],
    },
    StateEntry {
        id: "karnataka",
        name: "Karnataka",
        districts: &["Bangalore", "Mysore", "Hubli", "Mangalore"],
    },
    StateEntry {
        id: "telangana",
        name: "Telangana",
        districts: &["Hyderabad", "Warangal", "Nizamabad", "Khammam"],
    },
];

/// Static state → districts mapping. Not user-mutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCatalog;

impl LocationCatalog {
    /// All states in display order.
    pub fn states(&self) -> &'static [StateEntry] {
        STATES
    }

    pub fn state(&self, state_id: &str) -> Option<&'static StateEntry> {
        STATES.iter().find(|s| s.id == state_id)
    }

    /// Display name for a state id, falling back to the raw id.
    pub fn state_name<'a>(&self, state_id: &'a str) -> &'a str {
        match self.state(state_id) {
            Some(entry) => entry.name,
            None => state_id,
        }
    }
}
