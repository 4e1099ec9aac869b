//! Error types for Money Mirror.

/// Top-level error type for bringing the service up.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Shape violations in the static question or personality catalogs.
///
/// These are raised once, at load time. A catalog that fails validation is
/// never handed to the scoring engine.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Question catalog must contain {expected} questions, found {actual}")]
    QuestionCount { expected: usize, actual: usize },

    #[error("Script {category} must own {expected} questions, found {actual}")]
    CategoryImbalance {
        category: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate question id {id}")]
    DuplicateQuestionId { id: u32 },

    #[error("Personality catalog must contain {expected} entries, found {actual}")]
    PersonalityCount { expected: usize, actual: usize },

    #[error("Duplicate personality for profile {code}")]
    DuplicateProfile { code: String },

    #[error("Invalid profile code '{code}' in catalog")]
    InvalidProfileCode { code: String },
}

/// Errors from scoring a set of quiz answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// The answer sequence does not have one slot per question.
    #[error("Expected {expected} answers, got {actual}")]
    WrongAnswerCount { expected: usize, actual: usize },

    /// At least one slot is empty or outside the 1-5 Likert range.
    #[error("Every question needs an answer between 1 and 5 ({answered} of {expected} answered)")]
    IncompleteAnswers { answered: usize, expected: usize },

    /// The profile code has no personality. Indicates a catalog/engine mismatch
    /// when it comes out of scoring; a caller typo when it comes from input.
    #[error("No personality found for profile: {code}")]
    UnknownProfile { code: String },
}

impl QuizError {
    /// Caller supplied malformed or incomplete input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::WrongAnswerCount { .. } | Self::IncompleteAnswers { .. }
        )
    }

    /// A derived key had no catalog entry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownProfile { .. })
    }
}

/// Prompt document loading and assembly errors.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The raw document could not be fetched (missing file, HTTP failure).
    #[error("Prompt document unavailable at {location}: {reason}")]
    Unavailable { location: String, reason: String },

    /// The document has no card-specific prompt for this profile.
    #[error("No prompt found for profile code: {code}")]
    MissingCardPrompt { code: String },
}

/// HTTP server lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Server failed to start: {reason}")]
    StartupFailed { reason: String },
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
