//! Console adapter - Line-oriented control surface over stdin.
//!
//! Each command maps 1:1 onto an `AppContext` operation.

mod command;
mod handlers;

pub use command::{Command, CommandError, VoiceAction, HELP};
pub use handlers::execute;
