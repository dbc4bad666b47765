//! Axum route handlers for the Content API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::generation::generator::{GenerationRequest, GenerationResult};
use crate::generation::style_guide::{style_guide, StyleGuide};
use crate::generation::tone::{ToneFallback, DEFAULT_TONE, TONE_OPTIONS};
use crate::models::content_type::ContentType;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContentTypeInfo {
    pub id: ContentType,
    pub label: &'static str,
    pub style_guide: &'static StyleGuide,
}

#[derive(Debug, Serialize)]
pub struct ContentTypesResponse {
    pub content_types: Vec<ContentTypeInfo>,
    pub tones: &'static [&'static str],
    pub default_tone: &'static str,
    pub tone_fallback: ToneFallback,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/content/generate
///
/// Runs one demo generation. Storage failures come back as `success: false`
/// with a 200; malformed bodies and missing required fields get a 400.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(request) = payload?;

    if request.content_type.trim().is_empty() {
        return Err(AppError::Validation(
            "content_type cannot be empty".to_string(),
        ));
    }
    if request.topic.trim().is_empty() {
        return Err(AppError::Validation("topic cannot be empty".to_string()));
    }
    if request.target_audience.trim().is_empty() {
        return Err(AppError::Validation(
            "target_audience cannot be empty".to_string(),
        ));
    }

    // Held across the whole generation: the store's read-modify-write is single-writer.
    let mut service = state.service.clone().lock_owned().await;
    let result = tokio::task::spawn_blocking(move || service.generate(request))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Generation task failed: {e}")))?;

    Ok(Json(result))
}

/// GET /api/v1/content-types
///
/// Lists every content type with its style guide, plus the offered tones.
pub async fn handle_content_types(State(state): State<AppState>) -> Json<ContentTypesResponse> {
    let content_types = ContentType::ALL
        .into_iter()
        .map(|ct| ContentTypeInfo {
            id: ct,
            label: ct.label(),
            style_guide: style_guide(ct),
        })
        .collect();

    Json(ContentTypesResponse {
        content_types,
        tones: TONE_OPTIONS,
        default_tone: DEFAULT_TONE,
        tone_fallback: state.config.tone_fallback,
    })
}
