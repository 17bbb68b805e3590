use crate::{
    config::GeminiConfig,
    error::{GenerationError, Result},
    prompt::Prompt,
};
use reqwest::Client;
use serde_json::{json, Value};

/// A generative model that turns a [`Prompt`] into raw reply text.
///
/// Implementors make exactly one attempt per call. The reply is returned
/// uninterpreted; see [`crate::normalize`].
#[allow(async_fn_in_trait)]
pub trait CaptionModel {
    async fn generate(&self, prompt: &Prompt) -> Result<String>;
}

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Reuse an existing `reqwest::Client`.
    pub fn with_http_client(http: Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Whether a credential was configured at startup.
    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }
}

impl CaptionModel for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            tracing::warn!("caption generation requested without an API key");
            return Err(GenerationError::Configuration);
        };

        let body = request_body(prompt, self.config.temperature);
        let url = self.config.generate_url();
        tracing::debug!(url = %url, model = %self.config.model, "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| provider_failure(format!("Failed to connect to Gemini at {}: {}", url, e)))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(provider_failure(format!(
                "Gemini returned error {}: {}",
                status, text
            )));
        }

        let json_response: Value = resp
            .json()
            .await
            .map_err(|e| provider_failure(format!("Invalid response body from Gemini: {}", e)))?;

        Ok(reply_text(&json_response))
    }
}

/// Build the `generateContent` request body.
pub fn request_body(prompt: &Prompt, temperature: f64) -> Value {
    json!({
        "systemInstruction": {
            "parts": [{ "text": prompt.system_instruction }],
        },
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt.user_prompt }],
        }],
        "generationConfig": {
            "temperature": temperature,
            "responseMimeType": "application/json",
            "responseSchema": prompt.response_schema,
        },
    })
}

/// Concatenate the text parts of the first candidate. Empty if there are none.
pub fn reply_text(response: &Value) -> String {
    response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn provider_failure(diagnostic: String) -> GenerationError {
    tracing::error!(diagnostic = %diagnostic, "Gemini generation failed");
    GenerationError::provider(diagnostic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prompt, style::CaptionStyle, types::GenerationRequest};

    fn sample_prompt(include_hashtags: bool) -> Prompt {
        let req = GenerationRequest::new("coffee", CaptionStyle::Casual, include_hashtags).unwrap();
        prompt::build(&req)
    }

    #[test]
    fn test_request_body_shape() {
        let prompt = sample_prompt(true);
        let body = request_body(&prompt, 0.85);

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            prompt.system_instruction.as_str()
        );
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            prompt.user_prompt.as_str()
        );
        assert_eq!(body["generationConfig"]["temperature"], 0.85);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["captions", "hashtags"])
        );
    }

    #[test]
    fn test_reply_text_joins_parts() {
        let resp = json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"captions\":"}, {"text": "[\"a\"]}"}]}
            }]
        });
        assert_eq!(reply_text(&resp), "{\"captions\":[\"a\"]}");
    }

    #[test]
    fn test_reply_text_missing_candidates() {
        assert_eq!(reply_text(&json!({"promptFeedback": {}})), "");
        assert_eq!(reply_text(&json!({"candidates": []})), "");
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_request() {
        // Unroutable endpoint: a request attempt would surface as Provider.
        let config = GeminiConfig::default().with_endpoint("http://127.0.0.1:9");
        let client = GeminiClient::new(config);
        assert!(!client.has_credential());

        let err = client.generate(&sample_prompt(false)).await.unwrap_err();
        assert_eq!(err, GenerationError::Configuration);
    }
}
