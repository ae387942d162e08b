//! HTTP handlers for the payment resource
//!
//! Each handler decodes its inputs, calls the [`PaymentService`] and maps
//! the outcome to a status code and JSON body:
//!
//! | Route                     | Success                          | Failure                      |
//! |---------------------------|----------------------------------|------------------------------|
//! | `POST /payments`          | 201 `{"status":"Payment created"}` | 400 body/amount, 413 size, 500 store |
//! | `GET /payments/{id}`      | 200 payment JSON                 | 400 id, 404 missing          |
//! | `PUT /payments/{id}`      | 200 `{"status":"Payment updated"}` | 400 id/body/amount, 413 size, 500 store |
//! | `DELETE /payments/{id}`   | 200 `{"status":"Payment deleted"}` | 400 id, 500 store          |
//!
//! Extractor rejections are answered by the handlers themselves so that
//! every failure carries the JSON error shape.

use super::response::{respond_with_error, respond_with_json, respond_with_status};
use crate::core::error::PaymentError;
use crate::core::payment::PaymentRequest;
use crate::core::service::PaymentService;
use axum::{
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;

pub const INVALID_BODY: &str = "Invalid request body";
pub const INVALID_ID: &str = "Invalid payment ID";
pub const NOT_FOUND: &str = "Payment not found";
pub const BODY_TOO_LARGE: &str = "Request body too large";

type IdParams = Result<Path<HashMap<String, String>>, PathRejection>;
type RawBody = Result<Bytes, BytesRejection>;

/// State shared by the payment handlers
#[derive(Clone)]
pub struct PaymentAppState {
    pub service: Arc<dyn PaymentService>,
}

impl PaymentAppState {
    pub fn new(service: Arc<dyn PaymentService>) -> Self {
        Self { service }
    }
}

/// Parse the `id` path segment as a non-negative base-10 `u64`
///
/// Only ASCII digits are accepted; signs, whitespace and overflow are
/// rejected.
pub fn parse_payment_id(raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

fn id_from_params(params: &HashMap<String, String>) -> Option<u64> {
    parse_payment_id(params.get("id").map(String::as_str))
}

/// Id from the matched path, treating undecodable segments as invalid ids
fn id_from_path(path: IdParams) -> Option<u64> {
    match path {
        Ok(Path(params)) => id_from_params(&params),
        Err(rejection) => {
            tracing::debug!("Rejected payment id: {}", rejection.body_text());
            None
        }
    }
}

fn decode_request(body: &Bytes) -> Option<PaymentRequest> {
    serde_json::from_slice(body)
        .inspect_err(|e| tracing::debug!("Rejected payment body: {}", e))
        .ok()
}

/// Decode the buffered body or build the error response for it
fn request_from_body(body: RawBody) -> Result<PaymentRequest, Response> {
    let body = body.map_err(|rejection| {
        tracing::debug!("Failed to read payment body: {}", rejection.body_text());
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            respond_with_error(StatusCode::PAYLOAD_TOO_LARGE, BODY_TOO_LARGE)
        } else {
            respond_with_error(StatusCode::BAD_REQUEST, INVALID_BODY)
        }
    })?;
    decode_request(&body).ok_or_else(|| respond_with_error(StatusCode::BAD_REQUEST, INVALID_BODY))
}

/// Map a create/update/delete failure, hiding storage details behind `store_message`
fn write_failure(err: PaymentError, store_message: &str) -> Response {
    match err {
        PaymentError::Validation { message } => {
            respond_with_error(StatusCode::BAD_REQUEST, &message)
        }
        PaymentError::NotFound { .. } => respond_with_error(StatusCode::NOT_FOUND, NOT_FOUND),
        err @ PaymentError::Store { .. } => {
            tracing::error!(error = %err, "{}", store_message);
            respond_with_error(err.status_code(), store_message)
        }
    }
}

/// POST /payments
pub async fn create_payment(State(state): State<PaymentAppState>, body: RawBody) -> Response {
    let request = match request_from_body(body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.service.create_payment(request).await {
        Ok(payment) => {
            tracing::info!(id = payment.id, "Payment created");
            respond_with_status(StatusCode::CREATED, "Payment created")
        }
        Err(err) => write_failure(err, "Could not create payment"),
    }
}

/// GET /payments/{id}
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    path: IdParams,
) -> Response {
    let Some(id) = id_from_path(path) else {
        return respond_with_error(StatusCode::BAD_REQUEST, INVALID_ID);
    };

    match state.service.get_payment(id).await {
        Ok(payment) => respond_with_json(StatusCode::OK, payment),
        Err(err) => {
            if !err.is_not_found() {
                tracing::error!(id, error = %err, "Failed to fetch payment");
            }
            respond_with_error(StatusCode::NOT_FOUND, NOT_FOUND)
        }
    }
}

/// PUT /payments/{id}
pub async fn update_payment(
    State(state): State<PaymentAppState>,
    path: IdParams,
    body: RawBody,
) -> Response {
    let Some(id) = id_from_path(path) else {
        return respond_with_error(StatusCode::BAD_REQUEST, INVALID_ID);
    };
    let request = match request_from_body(body) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match state.service.update_payment(id, request).await {
        Ok(()) => respond_with_status(StatusCode::OK, "Payment updated"),
        Err(err) => write_failure(err, "Could not update payment"),
    }
}

/// DELETE /payments/{id}
pub async fn delete_payment(
    State(state): State<PaymentAppState>,
    path: IdParams,
) -> Response {
    let Some(id) = id_from_path(path) else {
        return respond_with_error(StatusCode::BAD_REQUEST, INVALID_ID);
    };

    match state.service.delete_payment(id).await {
        Ok(()) => respond_with_status(StatusCode::OK, "Payment deleted"),
        Err(err) => write_failure(err, "Could not delete payment"),
    }
}
