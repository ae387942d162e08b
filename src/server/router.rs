//! Router wiring and middleware for the payment routes

use super::handlers::{
    PaymentAppState, create_payment, delete_payment, get_payment, update_payment,
};
use super::response::internal_error;
use crate::config::ServerConfig;
use crate::core::service::PaymentService;
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Build the payment routes
///
/// - POST   /payments       - Create a payment
/// - GET    /payments/{id}  - Get a payment
/// - PUT    /payments/{id}  - Update a payment
/// - DELETE /payments/{id}  - Delete a payment
/// - GET    /health         - Liveness probe
///
/// Every request is traced, bounded by the configured timeout and body
/// limit, and shielded from handler panics.
pub fn build_router(service: Arc<dyn PaymentService>, config: &ServerConfig) -> Router {
    payment_routes(PaymentAppState::new(service))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// The four CRUD routes, without middleware
pub fn payment_routes(state: PaymentAppState) -> Router {
    Router::new()
        .route("/payments", post(create_payment))
        .route(
            "/payments/{id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "payments-api"
    }))
}

/// Turn a handler panic into a JSON 500 and keep the process alive
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Recovered from panic in request handler: {}", detail);
    internal_error()
}
