//! Configuration for Money Mirror.
//!
//! Everything comes from environment variables. `.env.local` and then `.env`
//! are loaded first if present; variables already set in the process win.

mod helpers;
mod images;
mod prompts;
mod server;

use crate::error::ConfigError;

pub use self::images::{
    DEFAULT_REQUEST_TIMEOUT_SECS, GeminiImagesConfig, ImagesConfig, OpenAiImagesConfig,
};
pub use self::prompts::{DEFAULT_PROMPTS_PATH, PromptsConfig};
pub use self::server::{DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, ServerConfig};

/// Main service configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub prompts: PromptsConfig,
    pub images: ImagesConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing files are fine; dotenvy never overrides existing vars.
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();

        Self::resolve()
    }

    /// Resolve from the current environment without touching dotenv files.
    pub fn resolve() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::resolve()?,
            prompts: PromptsConfig::resolve()?,
            images: ImagesConfig::resolve()?,
        })
    }
}
