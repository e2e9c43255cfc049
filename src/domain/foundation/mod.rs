//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the language setting, the state machine
//! trait and the error types that the rest of the domain builds on.

mod errors;
mod ids;
mod language;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AlertId, CaptureId, ListeningId};
pub use language::Language;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
