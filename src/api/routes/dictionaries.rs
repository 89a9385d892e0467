//! Dictionary Routes
//!
//! - GET /dictionaries - All four dictionaries
//! - POST /update_dictionary - Insert or replace an entry
//! - DELETE /delete_dictionary_entry - Remove an entry
//! - POST /toggle_dictionary_entry - Enable or disable an entry

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::StatusResponse;
use crate::api::error::{ApiError, ApiResult};
use crate::api::form::FormFields;
use crate::api::state::AppState;
use crate::dictionary::{DictionaryCategory, DictionaryCollection};

fn category(form: &FormFields) -> ApiResult<DictionaryCategory> {
    Ok(form.required("dict_type")?.parse::<DictionaryCategory>()?)
}

/// GET /dictionaries
pub async fn list_dictionaries(
    State(state): State<Arc<AppState>>,
) -> Json<DictionaryCollection> {
    Json(state.store.dictionaries().await)
}

/// POST /update_dictionary
///
/// Form fields: `dict_type`, `key`, `value`. `value` is JSON for
/// `keyword_based` and `gemini_keyword_prompts`.
pub async fn update_dictionary(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    let category = category(&form)?;
    let key = form.non_empty("key")?;
    let value = form.required("value")?;

    state.store.upsert(category, key, value).await?;
    tracing::info!(category = %category, key, "Dictionary entry saved");

    Ok(Json(StatusResponse::success()))
}

/// DELETE /delete_dictionary_entry
pub async fn delete_dictionary_entry(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    let category = category(&form)?;
    let key = form.required("key")?;

    if !state.store.delete(category, key).await? {
        return Err(ApiError::NotFound("Key not found".to_string()));
    }
    tracing::info!(category = %category, key, "Dictionary entry deleted");

    Ok(Json(StatusResponse::success()))
}

/// POST /toggle_dictionary_entry
pub async fn toggle_dictionary_entry(
    State(state): State<Arc<AppState>>,
    form: FormFields,
) -> ApiResult<Json<StatusResponse>> {
    let category = category(&form)?;
    let key = form.required("key")?;
    let enabled = form.boolean("enabled")?;

    if !state.store.toggle(category, key, enabled).await? {
        return Err(ApiError::NotFound(
            "Key not found or invalid dictionary type.".to_string(),
        ));
    }

    Ok(Json(StatusResponse::success()))
}
