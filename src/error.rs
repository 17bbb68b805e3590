use thiserror::Error;

/// Message shown when the topic field is empty.
pub const VALIDATION_MESSAGE: &str = "Oops! You forgot to enter a topic.";

/// Message shown for any provider-side failure.
pub const PROVIDER_MESSAGE: &str = "The AI is a bit busy right now. Please try again in a moment!";

/// Errors surfaced by the caption generation pipeline.
///
/// `Display` is always the user-facing text. Provider diagnostics are kept
/// separately and only reach the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Oops! You forgot to enter a topic.")]
    Validation,

    #[error("API Key is missing. Please set the API_KEY environment variable.")]
    Configuration,

    #[error("The AI is a bit busy right now. Please try again in a moment!")]
    Provider { diagnostic: String },
}

impl GenerationError {
    pub(crate) fn provider(diagnostic: impl Into<String>) -> Self {
        GenerationError::Provider {
            diagnostic: diagnostic.into(),
        }
    }

    /// Internal detail for logging. `None` for errors that carry none.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            GenerationError::Provider { diagnostic } => Some(diagnostic),
            _ => None,
        }
    }

    /// Whether this error belongs next to the topic field rather than in the
    /// result area.
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::Validation)
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Errors from reading or writing persisted settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}

/// Errors from the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write to clipboard: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_display_hides_diagnostic() {
        let err = GenerationError::provider("HTTP 503: upstream overloaded");
        assert_eq!(err.to_string(), PROVIDER_MESSAGE);
        assert_eq!(err.diagnostic(), Some("HTTP 503: upstream overloaded"));
    }

    #[test]
    fn test_validation_message() {
        let err = GenerationError::Validation;
        assert_eq!(err.user_message(), VALIDATION_MESSAGE);
        assert!(err.is_validation());
        assert!(err.diagnostic().is_none());
    }

    #[test]
    fn test_configuration_message_mentions_missing_key() {
        let msg = GenerationError::Configuration.to_string();
        assert!(msg.starts_with("API Key is missing"));
        assert!(!GenerationError::Configuration.is_validation());
    }
}
