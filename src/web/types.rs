//! Request and response bodies for the HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompts::PromptDocument;
use crate::quiz::{Answer, Personality, ProfileCode, Question, QuizOutcome};

// --- Health ---

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// --- Quiz ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    /// Likert value (as a string key) to label.
    pub likert_scale: BTreeMap<String, &'static str>,
}

/// Answers arrive as arbitrary JSON. Integers and whole-number floats
/// (`3.0`) count; anything else, including numeric strings, is unanswered.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: Vec<Value>,
}

impl ScoreRequest {
    pub fn answers(&self) -> Vec<Answer> {
        self.answers.iter().map(answer_value).collect()
    }
}

fn answer_value(value: &Value) -> Answer {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// A personality plus its tarot card position.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityResponse {
    #[serde(flatten)]
    pub personality: Personality,
    pub card_number: u8,
    pub card_numeral: &'static str,
}

impl From<&Personality> for PersonalityResponse {
    fn from(personality: &Personality) -> Self {
        Self {
            card_number: personality.code.card_number(),
            card_numeral: personality.code.roman_numeral(),
            personality: personality.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub outcome: QuizOutcome,
    pub card_number: u8,
    pub card_numeral: &'static str,
}

impl From<QuizOutcome> for ScoreResponse {
    fn from(outcome: QuizOutcome) -> Self {
        Self {
            card_number: outcome.profile.card_number(),
            card_numeral: outcome.profile.roman_numeral(),
            outcome,
        }
    }
}

// --- Prompts ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptsResponse {
    pub source: String,
    #[serde(flatten)]
    pub document: PromptDocument,
    pub missing_codes: Vec<ProfileCode>,
}

// --- Image generation ---

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageRequest {
    pub selfie: Option<String>,
    pub profile_code: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeminiImageRequest {
    pub prompt: Option<String>,
    pub selfie: Option<String>,
    pub speed: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotCardRequest {
    pub profile_code: Option<String>,
    pub selfie: Option<String>,
    pub provider: Option<String>,
    pub speed: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_floats_count_as_answers() {
        let request: ScoreRequest =
            serde_json::from_value(json!({"answers": [3, 3.0, 4.5, "3", null, -1.0]})).unwrap();
        assert_eq!(
            request.answers(),
            vec![Some(3), Some(3), None, None, None, Some(-1)]
        );
    }
}
