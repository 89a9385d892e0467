//! Settings Routes
//!
//! - GET /get_general_prompt, POST /update_general_prompt
//! - GET /get_ai_mode_status, POST /toggle_ai_mode
//! - POST /save_settings, GET /load_settings

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{AiModeResponse, PromptResponse, SettingsResponse, StatusResponse};
use crate::api::error::ApiResult;
use crate::api::form::FormFields;
use crate::api::state::AppState;

/// GET /get_general_prompt
pub async fn get_general_prompt(State(state): State<Arc<AppState>>) -> Json<PromptResponse> {
    Json(PromptResponse {
        prompt: state.store.general_prompt().await,
    })
}

/// POST /update_general_prompt
pub async fn update_general_prompt(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    let prompt = form.required("prompt")?;
    state.store.set_general_prompt(prompt).await?;
    Ok(Json(StatusResponse::success()))
}

/// GET /get_ai_mode_status
pub async fn get_ai_mode_status(State(state): State<Arc<AppState>>) -> Json<AiModeResponse> {
    Json(AiModeResponse {
        ai_mode_enabled: state.store.ai_mode().await,
    })
}

/// POST /toggle_ai_mode
pub async fn toggle_ai_mode(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    let enabled = form.boolean("enabled")?;
    state.store.set_ai_mode(enabled).await?;
    Ok(Json(StatusResponse::success()))
}

/// POST /save_settings
///
/// Optional fields `api_key` and `model_name`; each non-empty value is
/// remembered and becomes current.
pub async fn save_settings(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    state
        .store
        .save_settings(form.optional("api_key"), form.optional("model_name"))
        .await?;
    Ok(Json(StatusResponse::success()))
}

/// GET /load_settings
pub async fn load_settings(State(state): State<Arc<AppState>>) -> Json<SettingsResponse> {
    Json(state.store.settings().await.into())
}
