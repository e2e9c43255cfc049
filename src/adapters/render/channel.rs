//! Channel-backed update sink for a rendering task.

use tokio::sync::mpsc;
use tracing::trace;

use crate::ports::{UiUpdate, UpdateSink};

/// Forwards updates into an unbounded channel drained by the renderer.
pub struct ChannelUpdateSink {
    tx: mpsc::UnboundedSender<UiUpdate>,
}

impl ChannelUpdateSink {
    /// Creates the sink together with the receiving end.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl UpdateSink for ChannelUpdateSink {
    fn publish(&self, update: UiUpdate) {
        if self.tx.send(update).is_err() {
            trace!("Renderer gone, dropping update");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Language;

    #[tokio::test]
    async fn forwards_updates() {
        let (sink, mut rx) = ChannelUpdateSink::new();
        sink.publish(UiUpdate::LanguageChanged {
            language: Language::Hindi,
        });
        assert_eq!(
            rx.recv().await,
            Some(UiUpdate::LanguageChanged {
                language: Language::Hindi
            })
        );
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let (sink, rx) = ChannelUpdateSink::new();
        drop(rx);
        sink.publish(UiUpdate::LanguageChanged {
            language: Language::English,
        });
    }
}
