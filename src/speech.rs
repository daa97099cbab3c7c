//! Speech input: text from an external speech-to-text service.
//!
//! The core never touches a microphone. A [`Transcriber`] wraps whatever
//! service captures and recognizes speech; its text goes through the same
//! [`encode`](crate::encoder::encode) entry point as typed input.

use tracing::{debug, warn};

use crate::encoder::encode;
use crate::error::{Result, SpeechServiceError};
use crate::token::MorseCode;

/// A speech-to-text collaborator.
pub trait Transcriber {
    /// Capture one utterance and return its text.
    fn transcribe(&mut self) -> std::result::Result<String, SpeechServiceError>;
}

impl<F> Transcriber for F
where
    F: FnMut() -> std::result::Result<String, SpeechServiceError>,
{
    fn transcribe(&mut self) -> std::result::Result<String, SpeechServiceError> {
        self()
    }
}

/// Recognized text and its encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Recognized text, uppercased for display.
    pub text: String,
    pub code: MorseCode,
}

/// Run `transcriber` once and encode what it heard.
///
/// Service failures come back as `MorseError::SpeechService`; their
/// `Display` is the message to show the user.
pub fn encode_transcript<T>(transcriber: &mut T) -> Result<Transcript>
where
    T: Transcriber + ?Sized,
{
    let text = transcriber
        .transcribe()
        .inspect_err(|e| warn!(error = %e, "speech recognition failed"))?
        .to_uppercase();
    debug!(chars = text.chars().count(), "speech recognized");
    let code = encode(&text)?;
    Ok(Transcript { text, code })
}
