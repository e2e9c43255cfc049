//! SpeechOutput port - Audible playback of assistant answers.

/// Port for text-to-speech playback.
///
/// Calls must return promptly: the voice pipeline hands the text over and
/// never waits for playback to finish.
pub trait SpeechOutput: Send + Sync {
    fn speak(&self, text: &str, language_tag: &str);
}
