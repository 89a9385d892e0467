//! Translation Route
//!
//! - POST /translate - Translate English text to Bengali

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{TranslateRequest, TranslateResponse};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /translate
///
/// Works on a snapshot of the store so no lock is held while providers run.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    let snapshot = state.store.snapshot().await;
    let english = req.original_english_text.as_deref().unwrap_or(&req.text);

    let outcome = state.engine.translate(&snapshot, &req.text, english).await?;

    tracing::info!(
        chars = req.text.len(),
        used = outcome.used_dictionaries.len(),
        "Translation complete"
    );

    Ok(Json(TranslateResponse {
        translation: outcome.translation,
        used_dictionaries: outcome.used_dictionaries,
    }))
}
