//! OpenAI image provider.
//!
//! With a selfie, uploads it to `/v1/images/edits` as multipart form data so
//! the card keeps the sitter's likeness. Without one, asks
//! `/v1/images/generations` for a text-only render.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::multipart;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value, json};

use crate::config::OpenAiImagesConfig;
use crate::imagegen::{
    GeneratedImage, ImageGenError, ImageProvider, ImageRequest, ProviderKind, api_error_from_body,
    object_keys, parse_success_body, png_data_url,
};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_EDIT_MODEL: &str = "gpt-image-1";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-image-1.5";
pub const DEFAULT_SIZE: &str = "1024x1536";
pub const DEFAULT_QUALITY: &str = "low";

/// Upload limit for the edits endpoint (4 MiB).
pub const MAX_SELFIE_BYTES: usize = 4 * 1024 * 1024;

/// OpenAI GPT-Image provider.
pub struct OpenAiImages {
    api_key: SecretString,
    edit_model: String,
    generation_model: String,
    size: String,
    quality: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiImages {
    /// Create a provider with the default models and portrait size.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            edit_model: DEFAULT_EDIT_MODEL.to_string(),
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            size: DEFAULT_SIZE.to_string(),
            quality: DEFAULT_QUALITY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build from configuration. `None` when no API key is set.
    pub fn from_config(config: &OpenAiImagesConfig, timeout: Duration) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(
            Self::new(api_key)
                .with_base_url(&config.base_url)
                .with_models(&config.edit_model, &config.generation_model)
                .with_size(&config.size)
                .with_quality(&config.quality)
                .with_timeout(timeout),
        )
    }

    /// Set a custom base URL (for testing or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(mut self, edit: impl Into<String>, generation: impl Into<String>) -> Self {
        self.edit_model = edit.into();
        self.generation_model = generation.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        self
    }

    fn request_failed(e: impl std::fmt::Display) -> ImageGenError {
        ImageGenError::RequestFailed {
            provider: ProviderKind::OpenAi,
            reason: e.to_string(),
        }
    }

    fn edit_request(&self, prompt: &str, selfie: &str) -> Result<reqwest::RequestBuilder, ImageGenError> {
        let image = STANDARD
            .decode(selfie)
            .map_err(|e| ImageGenError::InvalidSelfie(e.to_string()))?;
        if image.len() > MAX_SELFIE_BYTES {
            return Err(ImageGenError::SelfieTooLarge {
                size: image.len(),
                max: MAX_SELFIE_BYTES,
            });
        }

        tracing::debug!(
            model = %self.edit_model,
            image_bytes = image.len(),
            prompt_chars = prompt.len(),
            "Sending image edit request"
        );

        let image_part = multipart::Part::bytes(image)
            .file_name("selfie.png")
            .mime_str("image/png")
            .map_err(Self::request_failed)?;

        let form = multipart::Form::new()
            .part("image", image_part)
            .text("prompt", prompt.to_string())
            .text("model", self.edit_model.clone())
            .text("size", self.size.clone());

        Ok(self
            .client
            .post(format!("{}/v1/images/edits", self.base_url))
            .multipart(form))
    }

    fn generation_request(&self, prompt: &str) -> reqwest::RequestBuilder {
        tracing::debug!(
            model = %self.generation_model,
            prompt_chars = prompt.len(),
            "Sending image generation request"
        );

        self.client
            .post(format!("{}/v1/images/generations", self.base_url))
            .json(&json!({
                "model": self.generation_model,
                "prompt": prompt,
                "n": 1,
                "size": self.size,
                "quality": self.quality,
            }))
    }
}

/// Pull the image out of a success body.
///
/// Checks `data[0].url`, then a top-level `url`, then `data[0].b64_json`
/// (wrapped as a PNG data URL).
pub fn extract_image_url(body: &Value) -> Option<String> {
    fn non_empty(v: Option<&Value>) -> Option<&str> {
        v.and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    let first = body.pointer("/data/0");

    if let Some(url) = non_empty(first.and_then(|d| d.get("url"))) {
        return Some(url.to_string());
    }
    if let Some(url) = non_empty(body.get("url")) {
        return Some(url.to_string());
    }
    non_empty(first.and_then(|d| d.get("b64_json"))).map(png_data_url)
}

/// Shape of the `data` field: `Array[n]`, a JSON type name, or `missing`
/// when absent, null, false, zero or empty.
fn data_structure(body: &Value) -> String {
    match body.get("data") {
        Some(Value::Array(items)) => format!("Array[{}]", items.len()),
        None | Some(Value::Null) | Some(Value::Bool(false)) => "missing".to_string(),
        Some(Value::String(s)) if s.is_empty() => "missing".to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => "missing".to_string(),
        Some(Value::String(_)) => "string".to_string(),
        Some(Value::Number(_)) => "number".to_string(),
        Some(Value::Bool(true)) => "boolean".to_string(),
        Some(Value::Object(_)) => "object".to_string(),
    }
}

#[async_trait]
impl ImageProvider for OpenAiImages {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageGenError> {
        let builder = match request.selfie_base64() {
            Some(selfie) => self.edit_request(&request.prompt, selfie)?,
            None => self.generation_request(&request.prompt),
        };

        let response = builder
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .send()
            .await
            .map_err(Self::request_failed)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::request_failed)?;

        tracing::debug!(status = %status, body = %crate::util::preview(&body, 500), "OpenAI response");

        if !status.is_success() {
            return Err(api_error_from_body(ProviderKind::OpenAi, status.as_u16(), &body));
        }

        let data = parse_success_body(ProviderKind::OpenAi, &body)?;
        let image_url = extract_image_url(&data).ok_or_else(|| {
            let mut diagnostics = Map::new();
            diagnostics.insert("dataStructure".into(), data_structure(&data).into());
            ImageGenError::NoImage {
                provider: ProviderKind::OpenAi,
                received: object_keys(&data),
                diagnostics,
            }
        })?;

        Ok(GeneratedImage { image_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> OpenAiImages {
        OpenAiImages::new(SecretString::from("sk-test".to_string()))
    }

    #[test]
    fn extracts_hosted_url_first() {
        let body = json!({"url": "https://b", "data": [{"url": "https://a", "b64_json": "AAAA"}]});
        assert_eq!(extract_image_url(&body).as_deref(), Some("https://a"));
    }

    #[test]
    fn extracts_top_level_url() {
        let body = json!({"url": "https://b", "data": [{"b64_json": "AAAA"}]});
        assert_eq!(extract_image_url(&body).as_deref(), Some("https://b"));
    }

    #[test]
    fn extracts_base64_as_data_url() {
        let body = json!({"created": 1, "data": [{"b64_json": "AAAA"}]});
        assert_eq!(
            extract_image_url(&body).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn empty_urls_fall_through_to_base64() {
        let body = json!({"url": "", "data": [{"url": "", "b64_json": "AAAA"}]});
        assert_eq!(
            extract_image_url(&body).as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn describes_data_field_shape() {
        assert_eq!(data_structure(&json!({"data": []})), "Array[0]");
        assert_eq!(data_structure(&json!({"data": [{}, {}]})), "Array[2]");
        assert_eq!(data_structure(&json!({"data": {"url": 1}})), "object");
        assert_eq!(data_structure(&json!({"data": "oops"})), "string");
        assert_eq!(data_structure(&json!({"data": null})), "missing");
        assert_eq!(data_structure(&json!({"data": ""})), "missing");
        assert_eq!(data_structure(&json!({"created": 1})), "missing");
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(extract_image_url(&json!({"data": []})), None);
        assert_eq!(extract_image_url(&json!({"data": "oops"})), None);
        assert_eq!(extract_image_url(&json!([1, 2])), None);
    }

    #[tokio::test]
    async fn invalid_base64_selfie_is_rejected() {
        let request = ImageRequest::new("a card").with_selfie(Some("not base64!!".into()));
        let err = provider().generate(&request).await.unwrap_err();
        assert!(matches!(err, ImageGenError::InvalidSelfie(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn oversized_selfie_is_rejected_before_upload() {
        let big = STANDARD.encode(vec![0u8; MAX_SELFIE_BYTES + 1]);
        let request = ImageRequest::new("a card").with_selfie(Some(big));
        match provider().generate(&request).await {
            Err(ImageGenError::SelfieTooLarge { size, max }) => {
                assert_eq!(size, MAX_SELFIE_BYTES + 1);
                assert_eq!(max, MAX_SELFIE_BYTES);
            }
            other => panic!("Expected SelfieTooLarge, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn request_failed_on_bad_url() {
        // port 1 won't be listening
        let provider = provider()
            .with_base_url("http://127.0.0.1:1")
            .with_timeout(Duration::from_secs(2));
        let result = provider.generate(&ImageRequest::new("a card")).await;
        assert!(
            matches!(result, Err(ImageGenError::RequestFailed { .. })),
            "Expected RequestFailed, got: {result:?}"
        );
    }

    #[test]
    fn from_config_requires_key() {
        let mut config = OpenAiImagesConfig::default();
        assert!(OpenAiImages::from_config(&config, Duration::from_secs(5)).is_none());
        config.api_key = Some(SecretString::from("sk".to_string()));
        let provider = OpenAiImages::from_config(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.edit_model, DEFAULT_EDIT_MODEL);
    }
}
