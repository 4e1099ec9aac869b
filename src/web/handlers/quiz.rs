use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};

use super::parse_json;
use crate::prompts::load_prompt_document;
use crate::quiz::LIKERT_SCALE;
use crate::web::error::ApiResult;
use crate::web::server::AppState;
use crate::web::types::{
    PersonalityResponse, PromptsResponse, QuestionsResponse, ScoreRequest, ScoreResponse,
};

pub(crate) async fn questions_handler(State(state): State<Arc<AppState>>) -> Json<QuestionsResponse> {
    let likert_scale: BTreeMap<String, &'static str> = LIKERT_SCALE
        .iter()
        .map(|(value, label)| (value.to_string(), *label))
        .collect();

    Json(QuestionsResponse {
        questions: state.engine.questions().iter().cloned().collect(),
        likert_scale,
    })
}

/// Score a complete answer set. Unanswered or out-of-range slots are a 400.
pub(crate) async fn score_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ScoreResponse>> {
    let request: ScoreRequest = parse_json(&body)?;
    let outcome = state.engine.process_validated(&request.answers())?;

    tracing::info!(profile = %outcome.profile, "Quiz scored");

    Ok(Json(outcome.into()))
}

pub(crate) async fn personalities_list_handler(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PersonalityResponse>> {
    Json(
        state
            .engine
            .personalities()
            .iter()
            .map(PersonalityResponse::from)
            .collect(),
    )
}

pub(crate) async fn personality_detail_handler(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> ApiResult<Json<PersonalityResponse>> {
    let personality = state.engine.lookup(&code)?;
    Ok(Json(personality.into()))
}

pub(crate) async fn prompts_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PromptsResponse>> {
    let document = load_prompt_document(state.prompts.as_ref()).await?;
    let missing_codes = document.missing_codes();
    if !missing_codes.is_empty() {
        tracing::warn!(missing = missing_codes.len(), "Prompt document is incomplete");
    }

    Ok(Json(PromptsResponse {
        source: state.prompts.location(),
        document,
        missing_codes,
    }))
}
