//! Domain layer containing the advisory engine's types and state machines.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, language, errors)
//! - `knowledge` - Crop records, the knowledge base and derived views
//! - `location` - State/district catalog and the location resolver
//! - `navigation` - Setup phase and active module
//! - `diagnosis` - Capture events and the diagnosis lifecycle
//! - `voice` - Voice assistant session lifecycle
//! - `advisory` - Alerts and weather reports

pub mod advisory;
pub mod diagnosis;
pub mod foundation;
pub mod knowledge;
pub mod location;
pub mod navigation;
pub mod voice;
