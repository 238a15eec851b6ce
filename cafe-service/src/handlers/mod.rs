pub mod contact;
pub mod menu;
pub mod reservations;
pub mod status;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;
use service_core::middleware::metrics::render_metrics;

use crate::dtos::RootResponse;
use crate::AppState;

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Fika Coffee API",
    })
}

/// Liveness probe; reports unhealthy when the store does not answer.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": state.config.service_name,
                "version": env!("CARGO_PKG_VERSION")
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": state.config.service_name,
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state
        .store
        .health_check()
        .await
        .map_err(|_| AppError::ServiceUnavailable)?;
    Ok(StatusCode::OK)
}

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        render_metrics(),
    )
}
