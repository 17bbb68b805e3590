use crate::{
    error::{GenerationError, Result},
    style::{CaptionStyle, Language},
};
use serde::{Deserialize, Serialize};

/// A validated caption request. Built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub topic: String,
    pub style: CaptionStyle,
    pub include_hashtags: bool,
    #[serde(default)]
    pub language: Language,
}

impl GenerationRequest {
    /// Create a request, trimming the topic.
    ///
    /// Fails with [`GenerationError::Validation`] if the topic is empty after
    /// trimming.
    pub fn new(topic: &str, style: CaptionStyle, include_hashtags: bool) -> Result<Self> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::Validation);
        }
        Ok(Self {
            topic: topic.to_string(),
            style,
            include_hashtags,
            language: Language::default(),
        })
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Captions and hashtags returned by the model.
///
/// Hashtags are stored without the leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub captions: Vec<String>,
    pub hashtags: Vec<String>,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.captions.is_empty() && self.hashtags.is_empty()
    }

    /// Hashtags as displayed, each with exactly one leading `#`.
    pub fn display_hashtags(&self) -> Vec<String> {
        self.hashtags.iter().map(|tag| display_hashtag(tag)).collect()
    }

    /// All hashtags on one line, ready to copy.
    pub fn hashtag_line(&self) -> String {
        self.display_hashtags().join(" ")
    }
}

/// Strip any leading `#` markers and surrounding whitespace.
pub fn canonical_hashtag(tag: &str) -> String {
    tag.trim().trim_start_matches('#').trim().to_string()
}

/// Render a hashtag with a single leading `#`, whichever form it came in.
pub fn display_hashtag(tag: &str) -> String {
    format!("#{}", canonical_hashtag(tag))
}

/// Result of one submission as published to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(GenerationResult),
    /// User-facing error message.
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Outcome::Success(result) => Some(result),
            Outcome::Failure(_) => None,
        }
    }
}

impl From<Result<GenerationResult>> for Outcome {
    fn from(res: Result<GenerationResult>) -> Self {
        match res {
            Ok(result) => Outcome::Success(result),
            Err(err) => Outcome::Failure(err.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_topic() {
        let req = GenerationRequest::new("  coffee morning \n", CaptionStyle::Casual, false).unwrap();
        assert_eq!(req.topic, "coffee morning");
        assert_eq!(req.language, Language::English);
    }

    #[test]
    fn test_request_rejects_blank_topic() {
        for topic in ["", "   ", "\t\n"] {
            let err = GenerationRequest::new(topic, CaptionStyle::Funny, true).unwrap_err();
            assert_eq!(err, GenerationError::Validation);
        }
    }

    #[test]
    fn test_display_hashtags_with_and_without_marker() {
        let result = GenerationResult {
            captions: vec![],
            hashtags: vec!["sun".into(), "#beach".into(), "##summer".into()],
        };
        assert_eq!(result.display_hashtags(), vec!["#sun", "#beach", "#summer"]);
        assert_eq!(result.hashtag_line(), "#sun #beach #summer");
    }

    #[test]
    fn test_outcome_from_error_uses_user_message() {
        let outcome: Outcome = Err(GenerationError::provider("socket closed")).into();
        assert_eq!(
            outcome,
            Outcome::Failure(crate::error::PROVIDER_MESSAGE.to_string())
        );
        assert!(outcome.result().is_none());
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let req = GenerationRequest::new("cats", CaptionStyle::Punny, true).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["includeHashtags"], true);
        assert_eq!(json["style"], "Punny");
    }
}
