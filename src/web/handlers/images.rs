use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use super::{non_empty, parse_json};
use crate::imagegen::{GenerationSpeed, ImageRequest, ProviderKind};
use crate::prompts::load_prompt_document;
use crate::quiz::ProfileCode;
use crate::web::error::{ApiError, ApiResult};
use crate::web::server::AppState;
use crate::web::types::{GeminiImageRequest, GenerateImageRequest, ImageResponse, TarotCardRequest};

fn parse_speed(speed: Option<String>) -> ApiResult<GenerationSpeed> {
    match non_empty(speed) {
        Some(s) => Ok(s.parse()?),
        None => Ok(GenerationSpeed::default()),
    }
}

/// Generate a card image with OpenAI from a caller-assembled prompt.
pub(crate) async fn generate_image_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImageResponse>> {
    let request: GenerateImageRequest = parse_json(&body)?;
    let (Some(profile_code), Some(prompt)) =
        (non_empty(request.profile_code), non_empty(request.prompt))
    else {
        return Err(ApiError::bad_request(
            "Missing required fields: profileCode and prompt are required",
        ));
    };

    let provider = state.provider(ProviderKind::OpenAi)?;
    let selfie = non_empty(request.selfie);

    tracing::info!(
        profile = %profile_code,
        prompt_chars = prompt.len(),
        has_selfie = selfie.is_some(),
        "Generating image"
    );

    let image = provider
        .generate(&ImageRequest::new(prompt).with_selfie(selfie))
        .await?;

    Ok(Json(ImageResponse {
        image_url: image.image_url,
        profile_code: Some(profile_code),
    }))
}

/// Generate a card image with Gemini from a caller-assembled prompt.
pub(crate) async fn generate_image_gemini_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImageResponse>> {
    let request: GeminiImageRequest = parse_json(&body)?;
    let Some(prompt) = non_empty(request.prompt) else {
        return Err(ApiError::bad_request(
            "Missing required field: prompt is required",
        ));
    };
    let speed = parse_speed(request.speed)?;

    let provider = state.provider(ProviderKind::Gemini)?;
    let selfie = non_empty(request.selfie);

    tracing::info!(
        %speed,
        prompt_chars = prompt.len(),
        has_selfie = selfie.is_some(),
        "Generating Gemini image"
    );

    let image = provider
        .generate(
            &ImageRequest::new(prompt)
                .with_selfie(selfie)
                .with_speed(speed),
        )
        .await?;

    Ok(Json(ImageResponse {
        image_url: image.image_url,
        profile_code: None,
    }))
}

/// Assemble the prompt for a profile from the prompt document, then generate.
pub(crate) async fn tarot_card_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<ImageResponse>> {
    let request: TarotCardRequest = parse_json(&body)?;

    let Some(raw_code) = non_empty(request.profile_code) else {
        return Err(ApiError::bad_request(
            "Missing required field: profileCode is required",
        ));
    };
    let code: ProfileCode = raw_code
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid profile code: {raw_code}")))?;

    let kind = match non_empty(request.provider) {
        Some(p) => p.parse()?,
        None => ProviderKind::default(),
    };
    let speed = parse_speed(request.speed)?;
    let provider = state.provider(kind)?;

    let document = load_prompt_document(state.prompts.as_ref()).await?;
    let prompt = document.assemble(&code.to_string())?;

    tracing::info!(
        profile = %code,
        provider = kind.as_str(),
        prompt_chars = prompt.len(),
        "Generating tarot card"
    );

    let image = provider
        .generate(
            &ImageRequest::new(prompt)
                .with_selfie(non_empty(request.selfie))
                .with_speed(speed),
        )
        .await?;

    Ok(Json(ImageResponse {
        image_url: image.image_url,
        profile_code: Some(code.to_string()),
    }))
}
