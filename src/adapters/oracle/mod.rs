//! Oracle adapters: table-backed sampling and scripted answers.

mod scripted;
mod table;
mod tables;

pub use scripted::ScriptedOracle;
pub use table::TableOracle;
pub use tables::{alert_table, diagnosis_table, voice_table, weather_table};
