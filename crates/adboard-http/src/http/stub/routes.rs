//! Route configuration for the contract stub

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use super::{items, metadata, server::AppState};

/// Creates the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(metadata::health_check))
        // Item routes
        .route("/api/1/item", post(items::create_item))
        .route("/api/1/item/{id}", get(items::get_item))
        .route("/api/1/{seller_id}/item", get(items::list_seller_items))
        .route("/api/2/item/{id}", delete(items::delete_item))
        // Statistics routes, same behaviour on both versions
        .route("/api/1/statistic/{id}", get(items::get_statistics))
        .route("/api/2/statistic/{id}", get(items::get_statistics))
        .fallback(metadata::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
