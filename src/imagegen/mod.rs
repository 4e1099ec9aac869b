//! Tarot-card image generation through third-party image APIs.
//!
//! ```text
//! ImageRequest { prompt, selfie?, speed }
//!     → [ImageProvider: OpenAiImages | GeminiImages]
//!     → GeneratedImage { image_url }   (https URL or data:image/png;base64,…)
//! ```
//!
//! Providers make exactly one upstream call per request. There is no retry
//! and no image post-processing; selfies are forwarded as received.

pub mod gemini;
pub mod openai;

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

pub use gemini::GeminiImages;
pub use openai::OpenAiImages;

/// Matches the `data:image/<type>;base64,` prefix of a data URL.
static DATA_URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^data:image/[a-z]+;base64,").unwrap());

/// Strip a leading image data-URL prefix, leaving bare base64.
pub fn strip_data_url_prefix(selfie: &str) -> &str {
    match DATA_URL_PREFIX.find(selfie) {
        Some(m) => &selfie[m.end()..],
        None => selfie,
    }
}

/// Wrap bare base64 PNG data as a data URL.
pub fn png_data_url(base64: &str) -> String {
    format!("data:image/png;base64,{base64}")
}

/// Generation effort. Only Gemini distinguishes the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationSpeed {
    #[default]
    Fast,
    Longer,
}

impl GenerationSpeed {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Longer => "longer",
        }
    }
}

impl fmt::Display for GenerationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationSpeed {
    type Err = ImageGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(Self::Fast),
            "longer" => Ok(Self::Longer),
            other => Err(ImageGenError::InvalidSpeed {
                value: other.to_string(),
            }),
        }
    }
}

/// Which upstream API a provider talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Name used in user-facing API error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }

    /// Vendor whose API key the provider needs.
    pub fn key_label(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Google",
        }
    }

    /// Client-facing message when a 2xx response carries no image.
    pub fn no_image_message(self) -> &'static str {
        match self {
            Self::OpenAi => "Invalid response from OpenAI API",
            Self::Gemini => "No image data in Gemini API response",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProviderKind {
    type Err = ImageGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            other => Err(ImageGenError::UnknownProvider {
                value: other.to_string(),
            }),
        }
    }
}

/// One image generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    /// Selfie as a data URL or bare base64. Empty strings count as absent.
    pub selfie: Option<String>,
    pub speed: GenerationSpeed,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            selfie: None,
            speed: GenerationSpeed::default(),
        }
    }

    pub fn with_selfie(mut self, selfie: Option<String>) -> Self {
        self.selfie = selfie;
        self
    }

    pub fn with_speed(mut self, speed: GenerationSpeed) -> Self {
        self.speed = speed;
        self
    }

    /// Bare base64 selfie data, if any.
    pub fn selfie_base64(&self) -> Option<&str> {
        self.selfie
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(strip_data_url_prefix)
    }
}

/// Generated image location: a hosted URL or a PNG data URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub image_url: String,
}

/// Errors from image generation.
#[derive(Debug, thiserror::Error)]
pub enum ImageGenError {
    /// No API key configured for the provider.
    #[error("Server configuration error: {} API key not found", .provider.key_label())]
    NotConfigured { provider: ProviderKind },

    #[error("Invalid speed parameter. Must be \"fast\" or \"longer\"")]
    InvalidSpeed { value: String },

    #[error("Invalid provider '{value}'. Must be \"openai\" or \"gemini\"")]
    UnknownProvider { value: String },

    #[error("Selfie is not valid base64: {0}")]
    InvalidSelfie(String),

    #[error("Selfie is too large: {size} bytes (max {max} bytes)")]
    SelfieTooLarge { size: usize, max: usize },

    /// Transport failure before any response arrived.
    #[error("{provider} request failed: {reason}")]
    RequestFailed {
        provider: ProviderKind,
        reason: String,
    },

    /// Upstream answered with an error. `status` is forwarded to the client.
    #[error("{provider} API error: {message}")]
    Api {
        provider: ProviderKind,
        status: u16,
        message: String,
        details: Value,
    },

    /// Upstream answered 2xx with a body that is not JSON.
    #[error("Invalid JSON response from {provider} API")]
    InvalidResponse { provider: ProviderKind, raw: String },

    /// Upstream answered 2xx JSON with no recognizable image.
    ///
    /// `diagnostics` holds provider-specific shape hints (`dataStructure`
    /// for OpenAI, `candidatesInfo` for Gemini).
    #[error("{}", .provider.no_image_message())]
    NoImage {
        provider: ProviderKind,
        received: Vec<String>,
        diagnostics: Map<String, Value>,
    },
}

impl ImageGenError {
    /// Caller supplied a bad parameter.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpeed { .. }
                | Self::UnknownProvider { .. }
                | Self::InvalidSelfie(_)
                | Self::SelfieTooLarge { .. }
        )
    }
}

/// Build an [`ImageGenError::Api`] from a non-success upstream response.
///
/// The message comes from `error.message`, then `message`, then the raw body.
/// Non-JSON bodies are wrapped as `{"message": body}` for the details.
pub fn api_error_from_body(provider: ProviderKind, status: u16, body: &str) -> ImageGenError {
    let details: Value = serde_json::from_str(body).unwrap_or_else(|_| {
        let message = if body.is_empty() { "Unknown error" } else { body };
        json!({ "message": message })
    });

    let message = details
        .pointer("/error/message")
        .and_then(Value::as_str)
        .or_else(|| details.get("message").and_then(Value::as_str))
        .unwrap_or(body)
        .to_string();

    ImageGenError::Api {
        provider,
        status,
        message,
        details,
    }
}

/// Parse a 2xx body as JSON.
pub(crate) fn parse_success_body(provider: ProviderKind, body: &str) -> Result<Value, ImageGenError> {
    serde_json::from_str(body).map_err(|_| ImageGenError::InvalidResponse {
        provider,
        raw: crate::util::preview(body, 500),
    })
}

/// Top-level keys of a JSON object, for diagnostics.
pub(crate) fn object_keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

/// A text-to-image (or image-to-image) backend.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Provider name (e.g., "openai").
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Generate one image.
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, ImageGenError>;
}
