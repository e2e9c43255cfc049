//! Speech output adapters.

use std::sync::{Mutex, PoisonError};
use tracing::info;

use crate::ports::SpeechOutput;

/// Writes spoken answers to the log. Used when no audio device is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSpeechOutput;

impl SpeechOutput for LoggingSpeechOutput {
    fn speak(&self, text: &str, language_tag: &str) {
        info!(lang = language_tag, "Speaking: {}", text);
    }
}

/// One recorded playback request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub language_tag: String,
}

/// Captures playback requests for assertions.
#[derive(Debug, Default)]
pub struct RecordingSpeechOutput {
    utterances: Mutex<Vec<Utterance>>,
}

impl RecordingSpeechOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utterances(&self) -> Vec<Utterance> {
        self.utterances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SpeechOutput for RecordingSpeechOutput {
    fn speak(&self, text: &str, language_tag: &str) {
        self.utterances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Utterance {
                text: text.to_string(),
                language_tag: language_tag.to_string(),
            });
    }
}
