//! Location catalog, location value and resolver.

mod catalog;
mod location;
mod resolver;

pub use catalog::{LocationCatalog, StateEntry};
pub use location::{district_id, Location, LocationDisplay, MAIN_AREA_LABEL, MAIN_DISTRICT};
pub use resolver::{DistrictOption, LocationResolver};
