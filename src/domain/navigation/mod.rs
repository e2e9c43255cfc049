//! Navigation: which module is visible and whether setup is done.

mod module_id;
mod state;

pub use module_id::ModuleId;
pub use state::{ModuleChange, NavigationState, Phase};
