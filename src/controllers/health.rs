use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use crate::domain::speech::SpeechService;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(speech_service): State<Arc<SpeechService>>) -> impl IntoResponse {
    if speech_service.local_engine_available().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "local_engine": "available",
                "cloud_engine": "remote"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "local_engine": "unavailable",
                "cloud_engine": "remote"
            })),
        )
    }
}
