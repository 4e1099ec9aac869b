//! Google Gemini image provider.
//!
//! Uses `models/{model}:generateContent`. Gemini has no size or quality
//! parameters, so aspect ratio and the "longer" quality hint travel as prompt
//! suffixes.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value, json};

use crate::config::GeminiImagesConfig;
use crate::imagegen::{
    GeneratedImage, GenerationSpeed, ImageGenError, ImageProvider, ImageRequest, ProviderKind,
    api_error_from_body, object_keys, parse_success_body, png_data_url,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

const ASPECT_RATIO_SUFFIX: &str =
    "\n\nGenerate this image in a 2:3 portrait aspect ratio (portrait orientation, taller than wide).";
const HIGH_QUALITY_SUFFIX: &str = "\n\nGenerate this image with high quality, detailed, sharp focus, professional quality, 4K resolution, intricate details, refined textures.";

/// Gemini image provider.
pub struct GeminiImages {
    api_key: SecretString,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiImages {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build from configuration. `None` when no API key is set.
    pub fn from_config(config: &GeminiImagesConfig, timeout: Duration) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(
            Self::new(api_key)
                .with_base_url(&config.base_url)
                .with_model(&config.model)
                .with_timeout(timeout),
        )
    }

    /// Set a custom base URL (for testing or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }
}

/// Prompt with the portrait suffix, plus the quality suffix for `longer`.
pub fn decorate_prompt(prompt: &str, speed: GenerationSpeed) -> String {
    let mut text = format!("{prompt}{ASPECT_RATIO_SUFFIX}");
    if speed == GenerationSpeed::Longer {
        text.push_str(HIGH_QUALITY_SUFFIX);
    }
    text
}

/// `generateContent` request body: optional inline selfie, then the text.
pub fn request_body(request: &ImageRequest) -> Value {
    let mut parts = Vec::with_capacity(2);
    if let Some(selfie) = request.selfie_base64() {
        parts.push(json!({
            "inlineData": { "mimeType": "image/png", "data": selfie }
        }));
    }
    parts.push(json!({ "text": decorate_prompt(&request.prompt, request.speed) }));
    json!({ "contents": [{ "parts": parts }] })
}

fn first_inline_data(parts: Option<&Value>) -> Option<&str> {
    parts?
        .as_array()?
        .iter()
        .find_map(|part| {
            part.pointer("/inlineData/data")
                .and_then(Value::as_str)
                .filter(|data| !data.is_empty())
        })
}

/// Base64 image data from the first candidate.
///
/// Looks in `content.parts` first, then `parts` directly on the candidate.
pub fn extract_image_data(body: &Value) -> Option<&str> {
    let candidate = body.pointer("/candidates/0")?;
    first_inline_data(candidate.pointer("/content/parts"))
        .or_else(|| first_inline_data(candidate.get("parts")))
}

/// Candidate count, first candidate's keys and its `finishReason`, or null
/// when the body has no candidate list.
fn candidates_info(body: &Value) -> Value {
    let Some(candidates) = body.get("candidates").and_then(Value::as_array) else {
        return Value::Null;
    };
    let first = candidates.first();

    let mut info = Map::new();
    info.insert("count".into(), candidates.len().into());
    info.insert(
        "firstCandidateKeys".into(),
        first.map_or(Value::Null, |c| object_keys(c).into()),
    );
    if let Some(reason) = first.and_then(|c| c.get("finishReason")) {
        info.insert("finishReason".into(), reason.clone());
    }
    Value::Object(info)
}

#[async_trait]
impl ImageProvider for GeminiImages {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageGenError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        tracing::debug!(
            model = %self.model,
            speed = %request.speed,
            has_selfie = request.selfie_base64().is_some(),
            prompt_chars = request.prompt.len(),
            "Sending Gemini generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| ImageGenError::RequestFailed {
                provider: ProviderKind::Gemini,
                reason: e.without_url().to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ImageGenError::RequestFailed {
                provider: ProviderKind::Gemini,
                reason: e.to_string(),
            })?;

        tracing::debug!(status = %status, body = %crate::util::preview(&body, 500), "Gemini response");

        if !status.is_success() {
            return Err(api_error_from_body(ProviderKind::Gemini, status.as_u16(), &body));
        }

        let data = parse_success_body(ProviderKind::Gemini, &body)?;

        if let Some(error) = data.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return Err(ImageGenError::Api {
                provider: ProviderKind::Gemini,
                status: 500,
                message,
                details: error.clone(),
            });
        }

        if let Some(reason) = data
            .pointer("/candidates/0/finishReason")
            .and_then(Value::as_str)
            .filter(|r| *r != "STOP")
        {
            tracing::warn!(finish_reason = %reason, "Gemini generation may have been stopped");
        }

        let image = extract_image_data(&data).ok_or_else(|| {
            let mut diagnostics = Map::new();
            diagnostics.insert("candidatesInfo".into(), candidates_info(&data));
            ImageGenError::NoImage {
                provider: ProviderKind::Gemini,
                received: object_keys(&data),
                diagnostics,
            }
        })?;

        Ok(GeneratedImage {
            image_url: png_data_url(image),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fast_prompt_gets_aspect_ratio_only() {
        let text = decorate_prompt("A card", GenerationSpeed::Fast);
        assert_eq!(
            text,
            "A card\n\nGenerate this image in a 2:3 portrait aspect ratio (portrait orientation, taller than wide)."
        );
    }

    #[test]
    fn longer_prompt_gets_quality_suffix() {
        let text = decorate_prompt("A card", GenerationSpeed::Longer);
        assert!(text.starts_with("A card\n\nGenerate this image in a 2:3"));
        assert!(text.ends_with("intricate details, refined textures."));
    }

    #[test]
    fn body_puts_selfie_before_text() {
        let request = ImageRequest::new("p")
            .with_selfie(Some("data:image/jpeg;base64,QUJD".into()));
        let body = request_body(&request);
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
        assert!(parts[1]["text"].as_str().unwrap().starts_with("p\n\n"));
    }

    #[test]
    fn body_without_selfie_is_text_only() {
        let body = request_body(&ImageRequest::new("p"));
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert!(parts[0].get("inlineData").is_none());
    }

    #[test]
    fn extracts_from_content_parts() {
        let body = json!({"candidates": [{"content": {"parts": [
            {"text": "here you go"},
            {"inlineData": {"mimeType": "image/png", "data": "AAAA"}}
        ]}, "finishReason": "STOP"}]});
        assert_eq!(extract_image_data(&body), Some("AAAA"));
    }

    #[test]
    fn falls_back_to_candidate_parts() {
        let body = json!({"candidates": [{
            "content": {"parts": [{"text": "no image"}]},
            "parts": [{"inlineData": {"data": "BBBB"}}]
        }]});
        assert_eq!(extract_image_data(&body), Some("BBBB"));
    }

    #[test]
    fn empty_inline_data_does_not_hide_a_later_image() {
        let body = json!({"candidates": [{"content": {"parts": [
            {"inlineData": {"data": ""}},
            {"inlineData": {"data": "AAAA"}}
        ]}}]});
        assert_eq!(extract_image_data(&body), Some("AAAA"));
    }

    #[test]
    fn candidates_info_summarizes_the_first_candidate() {
        let body = json!({"candidates": [
            {"content": {"parts": []}, "finishReason": "SAFETY"},
            {"content": {}}
        ]});
        assert_eq!(
            candidates_info(&body),
            json!({
                "count": 2,
                "firstCandidateKeys": ["content", "finishReason"],
                "finishReason": "SAFETY"
            })
        );
        assert_eq!(
            candidates_info(&json!({"candidates": []})),
            json!({"count": 0, "firstCandidateKeys": null})
        );
        assert_eq!(candidates_info(&json!({"promptFeedback": {}})), Value::Null);
    }

    #[test]
    fn no_candidates_means_no_image() {
        assert_eq!(extract_image_data(&json!({"candidates": []})), None);
        assert_eq!(extract_image_data(&json!({"promptFeedback": {}})), None);
    }
}
