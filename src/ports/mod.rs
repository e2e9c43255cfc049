//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the engine and the outside world. Adapters implement these ports.
//!
//! - `DatasetSource` - Reads the crop dataset once at startup
//! - `Oracle<T>` - Stand-in for diagnosis, voice recognition, weather and alerts
//! - `SpeechOutput` - Plays spoken answers
//! - `UpdateSink` - Receives every state change for rendering

mod dataset_source;
mod oracle;
mod speech_output;
mod update_sink;

pub use dataset_source::{DatasetSource, SourceError};
pub use oracle::{AlertOracle, DiagnosisOracle, Oracle, OracleError, VoiceOracle, WeatherOracle};
pub use speech_output::SpeechOutput;
pub use update_sink::{UiUpdate, UpdateSink};
