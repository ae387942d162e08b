//! JSON response helpers shared by all handlers

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

/// Serialize `body` as JSON with the given status
///
/// A body that cannot be serialized produces a 500 with a generic error
/// payload instead.
pub fn respond_with_json<T: Serialize>(status: StatusCode, body: T) -> Response {
    match serde_json::to_vec(&body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response body: {}", e);
            internal_error()
        }
    }
}

/// Respond with `{"error": message}`
pub fn respond_with_error(status: StatusCode, message: &str) -> Response {
    respond_with_json(status, json!({ "error": message }))
}

/// Respond with `{"status": message}`
pub fn respond_with_status(status: StatusCode, message: &str) -> Response {
    respond_with_json(status, json!({ "status": message }))
}

/// Generic 500 used when nothing more specific can be said
pub fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"error":"Internal server error"}"#,
    )
        .into_response()
}
