//! Voice assistant session: Idle → Listening → Answered, with cancellation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ListeningId, StateMachine};

/// A recognised question and the answer given for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceExchange {
    pub question: String,
    pub answer: String,
}

impl VoiceExchange {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceStatus {
    #[default]
    Idle,
    Listening,
    Answered,
}

impl VoiceStatus {
    /// Prompt shown next to the microphone button.
    pub fn prompt(&self) -> &'static str {
        match self {
            VoiceStatus::Idle => "Tap to speak...",
            VoiceStatus::Listening => "Listening...",
            VoiceStatus::Answered => "Response ready",
        }
    }
}

impl StateMachine for VoiceStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use VoiceStatus::*;
        matches!(
            (self, target),
            (Idle, Listening)
                | (Answered, Listening)
                | (Listening, Answered)
                | (Listening, Idle)
                | (Answered, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use VoiceStatus::*;
        match self {
            Idle => vec![Listening],
            Listening => vec![Answered, Idle],
            Answered => vec![Listening, Idle],
        }
    }
}

/// Voice state owned by the voice pipeline. At most one listening session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSession {
    status: VoiceStatus,
    listening: Option<ListeningId>,
    exchange: Option<VoiceExchange>,
}

impl VoiceSession {
    pub fn status(&self) -> VoiceStatus {
        self.status
    }

    pub fn exchange(&self) -> Option<&VoiceExchange> {
        self.exchange.as_ref()
    }

    pub fn listening_id(&self) -> Option<ListeningId> {
        self.listening
    }

    /// Begins listening. `None` when a session is already listening.
    pub fn start(&mut self) -> Option<ListeningId> {
        if self.status.advance(VoiceStatus::Listening).is_err() {
            return None;
        }
        let id = ListeningId::new();
        self.listening = Some(id);
        self.exchange = None;
        Some(id)
    }

    /// Cancels a listening session. Returns the cancelled id, if any.
    pub fn stop(&mut self) -> Option<ListeningId> {
        if self.status != VoiceStatus::Listening {
            return None;
        }
        self.status = VoiceStatus::Idle;
        self.listening.take()
    }

    /// Publishes the answer for `id` unless that session was cancelled.
    pub fn resolve(&mut self, id: ListeningId, exchange: VoiceExchange) -> bool {
        if self.status != VoiceStatus::Listening || self.listening != Some(id) {
            return false;
        }
        self.status = VoiceStatus::Answered;
        self.listening = None;
        self.exchange = Some(exchange);
        true
    }

    /// Back to `Idle` with nothing visible. Returns the cancelled id, if any.
    pub fn reset(&mut self) -> Option<ListeningId> {
        let cancelled = self.listening.take();
        self.status = VoiceStatus::Idle;
        self.exchange = None;
        cancelled
    }
}
