//! Health Routes
//!
//! - GET /health - Service status
//! - GET /ping - Load balancer probe

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, PingResponse};
use crate::api::state::AppState;

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let entries = state.store.dictionaries().await.len();

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "fast-translate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        dictionary_entries: entries,
        machine_translation: state.engine.has_machine_translator(),
    })
}

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong".to_string(),
    })
}
