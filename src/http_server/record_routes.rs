//! Record HTTP Routes
//!
//! CRUD endpoints over the shared [`RecordStore`].

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use super::errors::{reject, ApiError};
use crate::record::{Record, RecordStore, ValidationGate};

// ==================
// Shared State
// ==================

/// Record state shared across handlers
pub struct RecordState {
    pub store: Arc<RecordStore>,
    pub gate: ValidationGate,
}

impl RecordState {
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self {
            store,
            gate: ValidationGate::new(),
        }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Record Routes
// ==================

/// Create record routes
///
/// Each path is also served with a trailing slash.
pub fn record_routes(state: Arc<RecordState>) -> Router {
    // PUT is accepted for clients of the first release
    let collection = get(list_records_handler)
        .post(create_record_handler)
        .put(create_record_handler);
    let item = get(get_record_handler)
        .patch(update_record_handler)
        .delete(delete_record_handler);

    Router::new()
        .route("/data", collection.clone())
        .route("/data/", collection)
        .route("/data/:id", item.clone())
        .route("/data/:id/", item)
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_records_handler(State(state): State<Arc<RecordState>>) -> Json<Vec<Record>> {
    Json(state.store.get_all())
}

async fn create_record_handler(
    State(state): State<Arc<RecordState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let candidate = state.gate.check(&body).map_err(|e| reject(e, &body))?;
    let stored = state.store.create(candidate).map_err(|e| reject(e, &body))?;

    debug!(id = %stored.id, "Record created");
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn get_record_handler(
    State(state): State<Arc<RecordState>>,
    Path(id): Path<String>,
) -> Result<Json<Record>, ApiError> {
    state
        .store
        .get(&id)
        .map(Json)
        .map_err(|e| reject(e, &[]))
}

/// The key comes from the path; any `ID` in the body is ignored.
/// Responds with the value that was replaced.
async fn update_record_handler(
    State(state): State<Arc<RecordState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Record>, ApiError> {
    let candidate = state
        .gate
        .check_with_id(&body, &id)
        .map_err(|e| reject(e, &body))?;
    let previous = state.store.update(candidate).map_err(|e| reject(e, &body))?;

    debug!(id = %id, "Record updated");
    Ok(Json(previous))
}

async fn delete_record_handler(
    State(state): State<Arc<RecordState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(&id).map_err(|e| reject(e, &[]))?;

    debug!(id = %id, "Record deleted");
    Ok(Json(MessageResponse {
        message: format!("Data with ID {} has been deleted.", id),
    }))
}
