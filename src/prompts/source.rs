//! Where prompt documents come from.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use super::{PromptDocument, parse_prompt_document};
use crate::error::PromptError;

/// Fetches the raw text of a prompt document.
///
/// Sources are read on every request so that edits to the document take
/// effect without a restart.
#[async_trait]
pub trait PromptSource: Send + Sync {
    /// Human-readable location, used in errors and logs.
    fn location(&self) -> String;

    /// Read the raw document text.
    async fn load(&self) -> Result<String, PromptError>;
}

/// Prompt document on the local filesystem.
#[derive(Debug, Clone)]
pub struct FilePromptSource {
    path: PathBuf,
}

impl FilePromptSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PromptSource for FilePromptSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<String, PromptError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PromptError::Unavailable {
                location: self.location(),
                reason: e.to_string(),
            })
    }
}

/// Prompt document served over HTTP.
pub struct HttpPromptSource {
    url: String,
    client: reqwest::Client,
}

impl HttpPromptSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Bound the fetch by a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("money-mirror/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        self
    }
}

#[async_trait]
impl PromptSource for HttpPromptSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<String, PromptError> {
        let unavailable = |reason: String| PromptError::Unavailable {
            location: self.url.clone(),
            reason,
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP {status}")));
        }

        response.text().await.map_err(|e| unavailable(e.to_string()))
    }
}

/// Fetch and parse in one step. Fetch failures stay `Unavailable`; parsing
/// itself cannot fail.
pub async fn load_prompt_document(source: &dyn PromptSource) -> Result<PromptDocument, PromptError> {
    let raw = source.load().await?;
    Ok(parse_prompt_document(&raw))
}
