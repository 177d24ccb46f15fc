//! Item and statistics route handlers for the contract stub

use super::server::{AppState, error_to_status_code};
use crate::http::{ErrorResponse, parse_seller_path, validate_create_request};
use adboard::{Advertisement, Statistics};
use axum::{
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use log::{error, trace};
use serde_json::Value;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(error_response: ErrorResponse) -> ApiError {
    (
        error_to_status_code(&error_response.status),
        Json(error_response),
    )
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn create_item(
    State(app_state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Advertisement>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        error!("POST /api/1/item rejected body: {rejection}");
        reject(ErrorResponse::bad_request(&rejection.body_text()))
    })?;
    let payload = validate_create_request(&body).map_err(|error_response| {
        error!(
            "POST /api/1/item validation failed: {}",
            error_response.result.message
        );
        reject(error_response)
    })?;
    let advertisement = app_state.store.create(payload);
    trace!(
        "POST /api/1/item - created {} for seller {}",
        advertisement.id, advertisement.seller_id
    );
    Ok(Json(advertisement))
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Advertisement>>, ApiError> {
    match app_state.store.get(&id) {
        Some(advertisement) => {
            trace!("GET /api/1/item/{id} - found");
            Ok(Json(vec![advertisement]))
        }
        None => {
            trace!("GET /api/1/item/{id} - not found");
            Err(reject(ErrorResponse::item_not_found(&id)))
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(seller_id = %seller_id))]
pub async fn list_seller_items(
    State(app_state): State<AppState>,
    Path(seller_id): Path<String>,
) -> Result<Json<Vec<Advertisement>>, ApiError> {
    let seller_id = parse_seller_path(&seller_id).map_err(|error_response| {
        error!(
            "GET /api/1/{seller_id}/item validation failed: {}",
            error_response.result.message
        );
        reject(error_response)
    })?;
    let advertisements = app_state.store.list_by_seller(seller_id);
    trace!(
        "GET /api/1/{seller_id}/item - {} advertisements",
        advertisements.len()
    );
    Ok(Json(advertisements))
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn get_statistics(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Statistics>>, ApiError> {
    match app_state.store.statistics(&id) {
        Some(statistics) => Ok(Json(vec![statistics])),
        None => {
            trace!("GET statistic/{id} - not found");
            Err(reject(ErrorResponse::item_not_found(&id)))
        }
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(id = %id))]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if app_state.store.delete(&id) {
        trace!("DELETE /api/2/item/{id} - deleted");
        Ok(StatusCode::OK)
    } else {
        trace!("DELETE /api/2/item/{id} - not found");
        Err(reject(ErrorResponse::item_not_found(&id)))
    }
}
