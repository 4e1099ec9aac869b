//! JSON error envelope and the mapping from domain errors to HTTP statuses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PromptError, QuizError};
use crate::imagegen::ImageGenError;

pub(crate) type ApiResult<T> = Result<T, ApiError>;

/// Body is always `{"error": "..."}` plus optional extra keys such as
/// `details` or `message`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.into(),
                extra: Map::new(),
            },
        }
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// Attach an extra top-level key to the body.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.body.extra.insert(key.to_string(), value.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        Self::new(status, err.to_string())
    }
}

impl From<PromptError> for ApiError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Unavailable { .. } => {
                tracing::warn!(error = %err, "Prompt document unavailable");
                Self::not_found(err.to_string())
            }
            PromptError::MissingCardPrompt { .. } => Self::not_found(err.to_string()),
        }
    }
}

impl From<ImageGenError> for ApiError {
    fn from(err: ImageGenError) -> Self {
        let message = err.to_string();
        if err.is_bad_request() {
            return Self::bad_request(message);
        }
        match err {
            ImageGenError::Api {
                status, details, ..
            } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                Self::new(status, message).with("details", details)
            }
            ImageGenError::RequestFailed { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .with("message", message)
            }
            ImageGenError::InvalidResponse { raw, .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message).with("rawResponse", raw)
            }
            ImageGenError::NoImage {
                received,
                diagnostics,
                ..
            } => {
                let mut api = Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
                    .with("receivedStructure", received);
                api.body.extra.extend(diagnostics);
                api
            }
            ImageGenError::NotConfigured { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            _ => Self::bad_request(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imagegen::ProviderKind;
    use serde_json::json;

    fn body_json(err: &ApiError) -> Value {
        serde_json::to_value(&err.body).unwrap()
    }

    #[test]
    fn quiz_errors_map_to_client_statuses() {
        let err: ApiError = QuizError::UnknownProfile {
            code: "XXXX".into(),
        }
        .into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err: ApiError = QuizError::WrongAnswerCount {
            expected: 12,
            actual: 3,
        }
        .into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&err), json!({"error": "Expected 12 answers, got 3"}));
    }

    #[test]
    fn upstream_status_is_forwarded_with_details() {
        let err: ApiError = ImageGenError::Api {
            provider: ProviderKind::OpenAi,
            status: 429,
            message: "slow down".into(),
            details: json!({"error": {"message": "slow down"}}),
        }
        .into();
        assert_eq!(err.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            body_json(&err),
            json!({
                "error": "OpenAI API error: slow down",
                "details": {"error": {"message": "slow down"}}
            })
        );
    }

    #[test]
    fn transport_failure_is_internal_error() {
        let err: ApiError = ImageGenError::RequestFailed {
            provider: ProviderKind::Gemini,
            reason: "connection refused".into(),
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&err)["error"], "Internal server error");
        assert_eq!(
            body_json(&err)["message"],
            "Gemini request failed: connection refused"
        );
    }

    #[test]
    fn caller_mistakes_are_bad_requests() {
        for err in [
            ImageGenError::InvalidSpeed {
                value: "slow".into(),
            },
            ImageGenError::InvalidSelfie("bad padding".into()),
            ImageGenError::SelfieTooLarge { size: 10, max: 5 },
        ] {
            assert!(err.is_bad_request());
            let api: ApiError = err.into();
            assert_eq!(api.status, StatusCode::BAD_REQUEST);
        }

        let err: ApiError = ImageGenError::NotConfigured {
            provider: ProviderKind::Gemini,
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_image_carries_provider_diagnostics() {
        let mut diagnostics = Map::new();
        diagnostics.insert("dataStructure".into(), json!("Array[0]"));
        let err: ApiError = ImageGenError::NoImage {
            provider: ProviderKind::OpenAi,
            received: vec!["created".into(), "data".into()],
            diagnostics,
        }
        .into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(&err),
            json!({
                "error": "Invalid response from OpenAI API",
                "receivedStructure": ["created", "data"],
                "dataStructure": "Array[0]"
            })
        );
    }

    #[test]
    fn missing_card_prompt_is_not_found() {
        let err: ApiError = PromptError::MissingCardPrompt {
            code: "HHHH".into(),
        }
        .into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(&err)["error"],
            "No prompt found for profile code: HHHH"
        );
    }
}
