use crate::{
    client::CaptionModel,
    error::GenerationError,
    pipeline::generate_captions,
    style::{CaptionStyle, Language},
    types::{GenerationRequest, GenerationResult, Outcome},
};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// How long the success indicator stays up after a generation.
pub const SUCCESS_INDICATOR_DURATION: Duration = Duration::from_secs(4);

/// Request lifecycle: Idle -> Validating -> InFlight -> Succeeded/Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestState {
    pub fn as_str(&self) -> &str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Validating => "validating",
            RequestState::InFlight => "in_flight",
            RequestState::Succeeded => "succeeded",
            RequestState::Failed => "failed",
        }
    }

    /// True while a model call is outstanding.
    pub fn is_busy(&self) -> bool {
        *self == RequestState::InFlight
    }
}

/// Puts the state back to `Idle` if a submission is dropped mid-call.
struct InFlightGuard<'a> {
    state: &'a watch::Sender<RequestState>,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let stuck = self.state.borrow().is_busy();
        if stuck {
            tracing::debug!("submission dropped while in flight");
            self.state.send_replace(RequestState::Idle);
        }
    }
}

/// Form state and request sequencing for the caption generator.
///
/// Holds the user's inputs, runs submissions through the pipeline one at a
/// time, and keeps the latest result or error for display. `submit` borrows
/// the orchestrator mutably, so a second request cannot start while one is
/// pending. For the same reason the busy state is only visible from outside
/// through [`Orchestrator::subscribe`].
pub struct Orchestrator<M: CaptionModel> {
    model: M,
    topic: String,
    style: CaptionStyle,
    include_hashtags: bool,
    language: Language,
    result: GenerationResult,
    error: Option<GenerationError>,
    success_until: Option<Instant>,
    state: watch::Sender<RequestState>,
}

impl<M: CaptionModel> std::fmt::Debug for Orchestrator<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("state", &self.state())
            .field("topic", &self.topic)
            .field("style", &self.style)
            .field("include_hashtags", &self.include_hashtags)
            .field("language", &self.language)
            .field("captions", &self.result.captions.len())
            .field("error", &self.error)
            .finish()
    }
}

impl<M: CaptionModel> Orchestrator<M> {
    pub fn new(model: M) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self {
            model,
            topic: String::new(),
            style: CaptionStyle::default(),
            include_hashtags: false,
            language: Language::default(),
            result: GenerationResult::default(),
            error: None,
            success_until: None,
            state,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn state(&self) -> RequestState {
        *self.state.borrow()
    }

    /// Watch state transitions, e.g. to drive a loading indicator while a
    /// submission is pending ([`RequestState::is_busy`]).
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Update the topic. Any displayed error is dismissed.
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
        self.error = None;
    }

    pub fn style(&self) -> CaptionStyle {
        self.style
    }

    pub fn set_style(&mut self, style: CaptionStyle) {
        self.style = style;
    }

    pub fn include_hashtags(&self) -> bool {
        self.include_hashtags
    }

    pub fn set_include_hashtags(&mut self, include: bool) {
        self.include_hashtags = include;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn result(&self) -> &GenerationResult {
        &self.result
    }

    pub fn error(&self) -> Option<&GenerationError> {
        self.error.as_ref()
    }

    /// Message for the error slot, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(GenerationError::user_message)
    }

    /// True for [`SUCCESS_INDICATOR_DURATION`] after a successful generation.
    pub fn success_indicator_active(&self) -> bool {
        self.success_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }

    /// Validate the form and, if valid, run one generation.
    ///
    /// Dropping the future before it completes leaves results untouched and
    /// returns the state to `Idle`.
    pub async fn submit(&mut self) -> Outcome {
        self.transition(RequestState::Validating);

        let request = match GenerationRequest::new(&self.topic, self.style, self.include_hashtags) {
            Ok(req) => req.with_language(self.language),
            Err(err) => {
                tracing::warn!("rejected submission with empty topic");
                let message = err.user_message();
                self.result = GenerationResult::default();
                self.success_until = None;
                self.error = Some(err);
                self.transition(RequestState::Idle);
                return Outcome::Failure(message);
            }
        };

        self.error = None;
        self.success_until = None;
        self.transition(RequestState::InFlight);
        let _guard = InFlightGuard { state: &self.state };

        match generate_captions(&self.model, &request).await {
            Ok(result) => {
                tracing::info!(
                    style = %request.style,
                    captions = result.captions.len(),
                    hashtags = result.hashtags.len(),
                    "captions generated"
                );
                self.result = result.clone();
                self.success_until = Some(Instant::now() + SUCCESS_INDICATOR_DURATION);
                self.transition(RequestState::Succeeded);
                Outcome::Success(result)
            }
            Err(err) => {
                tracing::info!(error = %err, "caption generation failed");
                let message = err.user_message();
                self.error = Some(err);
                self.transition(RequestState::Failed);
                Outcome::Failure(message)
            }
        }
    }

    /// Run again with the current topic, style, and options.
    pub async fn regenerate(&mut self) -> Outcome {
        self.submit().await
    }

    /// Reset every field, result, and error to its initial value.
    pub fn clear_all(&mut self) {
        self.topic.clear();
        self.style = CaptionStyle::default();
        self.include_hashtags = false;
        self.language = Language::default();
        self.result = GenerationResult::default();
        self.error = None;
        self.success_until = None;
        self.transition(RequestState::Idle);
    }

    fn transition(&self, next: RequestState) {
        tracing::trace!(state = next.as_str(), "request state");
        self.state.send_replace(next);
    }
}
