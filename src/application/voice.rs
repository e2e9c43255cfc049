//! Voice assistant pipeline: listen → sampled answer → speech output.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::{debug, warn};

use super::deferred::Deferred;
use super::lock;
use super::snapshot::VoiceSnapshot;
use crate::domain::foundation::{Language, ListeningId};
use crate::domain::voice::{VoiceSession, VoiceStatus};
use crate::ports::{SpeechOutput, UiUpdate, UpdateSink, VoiceOracle};

/// At most one listening session; `stop` cancels it without publishing.
#[derive(Clone)]
pub struct VoicePipeline {
    session: Arc<Mutex<VoiceSession>>,
    oracle: Arc<VoiceOracle>,
    sink: Arc<dyn UpdateSink>,
    speech: Arc<dyn SpeechOutput>,
    language: Arc<Mutex<Language>>,
    delay: Duration,
    pending: Arc<Mutex<Option<Deferred>>>,
}

impl VoicePipeline {
    /// `language` is read when an answer is spoken, so later language
    /// changes apply to the next answer.
    pub fn new(
        oracle: Arc<VoiceOracle>,
        sink: Arc<dyn UpdateSink>,
        speech: Arc<dyn SpeechOutput>,
        language: Arc<Mutex<Language>>,
        delay: Duration,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(VoiceSession::default())),
            oracle,
            sink,
            speech,
            language,
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts listening. A no-op returning `None` while already listening.
    pub fn start(&self) -> Option<ListeningId> {
        let id = {
            let mut session = lock(&self.session);
            let Some(id) = session.start() else {
                debug!("Already listening, start ignored");
                return None;
            };
            self.sink.publish(UiUpdate::VoiceStatus {
                status: VoiceStatus::Listening,
            });
            id
        };
        debug!(listening_id = %id, "Listening");

        let pipeline = self.clone();
        let task = Deferred::after(self.delay, async move {
            pipeline.finish(id).await;
        });
        *lock(&self.pending) = Some(task);
        Some(id)
    }

    /// Cancels the listening session. Returns false if nothing was listening.
    pub fn stop(&self) -> bool {
        let mut session = lock(&self.session);
        let Some(id) = session.stop() else {
            return false;
        };
        self.cancel_pending();
        debug!(listening_id = %id, "Listening stopped");
        self.sink.publish(UiUpdate::VoiceStatus {
            status: VoiceStatus::Idle,
        });
        true
    }

    /// Back to `Idle` with no exchange visible, cancelling any listen.
    pub fn reset(&self) {
        let mut session = lock(&self.session);
        if let Some(id) = session.reset() {
            self.cancel_pending();
            debug!(listening_id = %id, "Listening cancelled by reset");
        }
        self.sink.publish(UiUpdate::VoiceStatus {
            status: VoiceStatus::Idle,
        });
    }

    pub fn status(&self) -> VoiceStatus {
        lock(&self.session).status()
    }

    pub fn snapshot(&self) -> VoiceSnapshot {
        let session = lock(&self.session);
        VoiceSnapshot {
            status: session.status(),
            prompt: session.status().prompt(),
            exchange: session.exchange().cloned(),
        }
    }

    /// Cancels pending work on teardown.
    pub fn shutdown(&self) {
        lock(&self.session).stop();
        self.cancel_pending();
    }

    fn cancel_pending(&self) {
        if let Some(task) = lock(&self.pending).take() {
            task.cancel();
        }
    }

    async fn finish(&self, id: ListeningId) {
        let sampled = self.oracle.sample().await;

        let answer = {
            let mut session = lock(&self.session);
            match sampled {
                Ok(exchange) => {
                    if !session.resolve(id, exchange.clone()) {
                        debug!(listening_id = %id, "Discarding answer for a cancelled session");
                        return;
                    }
                    self.sink.publish(UiUpdate::VoiceStatus {
                        status: VoiceStatus::Answered,
                    });
                    let answer = exchange.answer.clone();
                    self.sink.publish(UiUpdate::VoiceAnswered(exchange));
                    answer
                }
                Err(err) => {
                    if session.listening_id() == Some(id) {
                        session.stop();
                        warn!(listening_id = %id, error = %err, "Voice oracle failed");
                        self.sink.publish(UiUpdate::VoiceStatus {
                            status: VoiceStatus::Idle,
                        });
                    }
                    return;
                }
            }
        };

        let language = *lock(&self.language);
        self.speech.speak(&answer, language.speech_tag());
    }
}
