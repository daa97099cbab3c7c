use thiserror::Error;

pub type Result<T> = std::result::Result<T, MorseError>;

#[derive(Debug, Error)]
pub enum MorseError {
    /// Nothing was typed. Text made only of unmapped characters is not an error.
    #[error("Enter text first!")]
    EmptyInput,
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("Audio device error: {0}")]
    AudioDevice(String),
    #[error(transparent)]
    SpeechService(#[from] SpeechServiceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failures reported by an external speech-to-text collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechServiceError {
    #[error("No speech detected. Try again!")]
    NoSpeechDetected,
    #[error("Couldn't understand the speech!")]
    Unintelligible,
    #[error("Speech recognition service error!")]
    ServiceUnavailable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MorseError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        MorseError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Whether the caller can try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MorseError::AudioDevice(_)
                | MorseError::SpeechService(SpeechServiceError::ServiceUnavailable)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_errors_carry_user_messages() {
        let err: MorseError = SpeechServiceError::Unintelligible.into();
        assert_eq!(err.to_string(), "Couldn't understand the speech!");
        assert_eq!(
            SpeechServiceError::NoSpeechDetected.to_string(),
            "No speech detected. Try again!"
        );
    }

    #[test]
    fn only_device_and_service_failures_are_retryable() {
        assert!(MorseError::AudioDevice("gone".into()).is_retryable());
        assert!(MorseError::from(SpeechServiceError::ServiceUnavailable).is_retryable());
        assert!(!MorseError::EmptyInput.is_retryable());
        assert!(!MorseError::invalid("sample_rate", "must be positive").is_retryable());
    }
}
