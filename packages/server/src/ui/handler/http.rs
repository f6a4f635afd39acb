//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::SessionSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List connected users with their session counts (for debugging/testing)
pub async fn list_sessions(State(state): State<Arc<AppState>>) -> Json<Vec<SessionSummaryDto>> {
    let summaries = state.registry.user_summaries().await;

    let dtos = summaries
        .into_iter()
        .map(|s| SessionSummaryDto {
            user_name: s.user_name,
            session_count: s.session_count,
        })
        .collect();

    Json(dtos)
}
