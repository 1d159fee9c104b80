//! Info HTTP Routes
//!
//! Liveness check and service identity.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use crate::service::ServiceInfo;

/// Create info routes
pub fn info_routes(info: Arc<ServiceInfo>) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/info", get(info_handler))
        .with_state(info)
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK\n")
}

/// Service identity handler
async fn info_handler(State(info): State<Arc<ServiceInfo>>) -> Json<ServiceInfo> {
    Json(info.as_ref().clone())
}
