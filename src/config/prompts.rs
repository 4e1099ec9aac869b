use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::helpers::{optional_env, validate_http_url};
use crate::error::ConfigError;
use crate::prompts::{FilePromptSource, HttpPromptSource, PromptSource};

pub const DEFAULT_PROMPTS_PATH: &str = "public/data/prompts.txt";

/// Where the tarot prompt document is read from. A URL takes precedence over
/// the path.
#[derive(Debug, Clone)]
pub struct PromptsConfig {
    pub path: PathBuf,
    pub url: Option<String>,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PROMPTS_PATH),
            url: None,
        }
    }
}

impl PromptsConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let path = optional_env("PROMPTS_PATH")?
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPTS_PATH));

        let url = optional_env("PROMPTS_URL")?;
        if let Some(ref url) = url {
            validate_http_url("PROMPTS_URL", url)?;
        }

        Ok(Self { path, url })
    }

    /// Build the configured document source.
    pub fn source(&self, timeout: Duration) -> Arc<dyn PromptSource> {
        match &self.url {
            Some(url) => Arc::new(HttpPromptSource::new(url.clone()).with_timeout(timeout)),
            None => Arc::new(FilePromptSource::new(self.path.clone())),
        }
    }
}
