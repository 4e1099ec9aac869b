use std::time::Duration;

use secrecy::SecretString;

use crate::config::helpers::{optional_env, parse_optional_env, validate_http_url};
use crate::error::ConfigError;
use crate::imagegen::{gemini, openai};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// OpenAI image API settings.
#[derive(Debug, Clone)]
pub struct OpenAiImagesConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    /// Model for selfie edits.
    pub edit_model: String,
    /// Model for text-only generation.
    pub generation_model: String,
    pub size: String,
    /// Quality for text-only generation.
    pub quality: String,
}

impl Default for OpenAiImagesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: openai::DEFAULT_BASE_URL.to_string(),
            edit_model: openai::DEFAULT_EDIT_MODEL.to_string(),
            generation_model: openai::DEFAULT_GENERATION_MODEL.to_string(),
            size: openai::DEFAULT_SIZE.to_string(),
            quality: openai::DEFAULT_QUALITY.to_string(),
        }
    }
}

/// Gemini image API settings.
#[derive(Debug, Clone)]
pub struct GeminiImagesConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
}

impl Default for GeminiImagesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: gemini::DEFAULT_BASE_URL.to_string(),
            model: gemini::DEFAULT_MODEL.to_string(),
        }
    }
}

/// Image provider configuration.
#[derive(Debug, Clone)]
pub struct ImagesConfig {
    pub openai: OpenAiImagesConfig,
    pub gemini: GeminiImagesConfig,
    /// Timeout for every outbound request (image APIs and remote prompt
    /// documents).
    pub request_timeout: Duration,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            openai: OpenAiImagesConfig::default(),
            gemini: GeminiImagesConfig::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ImagesConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let openai = OpenAiImagesConfig {
            api_key: optional_env("OPENAI_API_KEY")?.map(SecretString::from),
            base_url: optional_env("OPENAI_BASE_URL")?.unwrap_or(defaults.openai.base_url),
            edit_model: optional_env("OPENAI_EDIT_MODEL")?.unwrap_or(defaults.openai.edit_model),
            generation_model: optional_env("OPENAI_GENERATION_MODEL")?
                .unwrap_or(defaults.openai.generation_model),
            size: optional_env("OPENAI_IMAGE_SIZE")?.unwrap_or(defaults.openai.size),
            quality: optional_env("OPENAI_IMAGE_QUALITY")?.unwrap_or(defaults.openai.quality),
        };
        validate_http_url("OPENAI_BASE_URL", &openai.base_url)?;

        let gemini = GeminiImagesConfig {
            api_key: optional_env("GOOGLE_API_KEY")?.map(SecretString::from),
            base_url: optional_env("GEMINI_BASE_URL")?.unwrap_or(defaults.gemini.base_url),
            model: optional_env("GEMINI_IMAGE_MODEL")?.unwrap_or(defaults.gemini.model),
        };
        validate_http_url("GEMINI_BASE_URL", &gemini.base_url)?;

        let timeout_secs =
            parse_optional_env("IMAGE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "IMAGE_REQUEST_TIMEOUT_SECS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            openai,
            gemini,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
