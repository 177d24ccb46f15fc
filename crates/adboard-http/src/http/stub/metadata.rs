//! Metadata route handlers

use super::server::AppState;
use crate::http::{ErrorResponse, HealthCheckResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use log::trace;

pub async fn health_check(
    State(_app_state): State<AppState>,
) -> Result<Json<HealthCheckResponse>, (StatusCode, Json<ErrorResponse>)> {
    trace!("GET /health");
    Ok(Json(HealthCheckResponse {
        status: "healthy".to_string(),
        service: "adboard-stub".to_string(),
        timestamp: chrono::Utc::now().timestamp().max(0) as u64,
    }))
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("route not found")),
    )
}
