//! Adapters - Implementations of port interfaces.
//!
//! - `console` - Line-oriented command surface driving the application
//! - `dataset` - HTTP and file dataset sources
//! - `oracle` - Table-backed and scripted oracles, plus the canned tables
//! - `speech` - Logging and recording speech output
//! - `render` - In-memory and channel update sinks

pub mod console;
pub mod dataset;
pub mod oracle;
pub mod render;
pub mod speech;

pub use dataset::{source_for, FileDatasetSource, HttpDatasetSource, UnconfiguredSource};
pub use oracle::{
    alert_table, diagnosis_table, voice_table, weather_table, ScriptedOracle, TableOracle,
};
pub use render::{ChannelUpdateSink, InMemoryUpdateSink};
pub use speech::{LoggingSpeechOutput, RecordingSpeechOutput, Utterance};
