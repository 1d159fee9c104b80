//! # HTTP Errors
//!
//! Maps record rejections to status codes and JSON bodies, and logs each
//! rejection with its diagnostic event.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::observability::Event;
use crate::record::RecordError;

/// Shown with every bad-request response
pub const SUBMISSION_HINT: &str =
    r#"Please check submission: {"ID":"<ID_VALUE>","Message":"<MESSAGE_VALUE>"}"#;

/// Status code for a record rejection
pub fn status_code(err: &RecordError) -> StatusCode {
    match err {
        // 400 Bad Request
        RecordError::MalformedInput(_) => StatusCode::BAD_REQUEST,
        RecordError::MissingField(_) => StatusCode::BAD_REQUEST,

        // 404 Not Found
        RecordError::NotFound(_) => StatusCode::NOT_FOUND,

        // 409 Conflict
        RecordError::AlreadyExists(_) => StatusCode::CONFLICT,
        RecordError::NoChange(_) => StatusCode::CONFLICT,
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<&'static str>>,
}

impl From<&RecordError> for ErrorResponse {
    fn from(err: &RecordError) -> Self {
        let fields = match err {
            RecordError::MissingField(fields) => {
                Some(fields.iter().map(|f| f.as_str()).collect())
            }
            _ => None,
        };

        Self {
            error: err.to_string(),
            code: status_code(err).as_u16(),
            hint: err.is_validation().then_some(SUBMISSION_HINT),
            fields,
        }
    }
}

/// A rejected request, ready to be sent
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        Self {
            status: status_code(&err),
            body: ErrorResponse::from(&err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Diagnostic event for a rejection
pub fn event_for(err: &RecordError) -> Event {
    match err {
        RecordError::MalformedInput(_) => Event::Unmarshal,
        RecordError::MissingField(_) => Event::InvalidDataStruct,
        RecordError::AlreadyExists(_) | RecordError::NoChange(_) => Event::Conflict,
        RecordError::NotFound(_) => Event::NotFound,
    }
}

/// Log a rejection and convert it into a response.
///
/// `payload` is the raw request body, if any, and is attached to
/// validation failures so the offending submission can be identified.
pub fn reject(err: RecordError, payload: &[u8]) -> ApiError {
    let event = event_for(&err);
    let data = String::from_utf8_lossy(payload);

    match &err {
        RecordError::MalformedInput(reason) => {
            error!(event = %event, data = %data, reason = %reason, "Could not decode record");
        }
        RecordError::MissingField(fields) => {
            for field in fields {
                error!(
                    event = %Event::ValidateErrors,
                    data = %format!("[{},required]", field),
                    "Field validation failed"
                );
            }
            error!(event = %event, data = %data, "Invalid record");
        }
        RecordError::AlreadyExists(id) | RecordError::NoChange(id) => {
            warn!(event = %event, id = %id, "{}", err);
        }
        RecordError::NotFound(id) => {
            info!(event = %event, id = %id, "{}", err);
        }
    }

    ApiError::from(err)
}
