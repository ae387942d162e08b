//! Typed error handling for the payments service
//!
//! Every layer (repository, service, handler) speaks the same closed set of
//! error kinds. The HTTP layer maps them to status codes by kind, never by
//! inspecting the message text.
//!
//! # Error Categories
//!
//! - [`PaymentError::Validation`]: the request was well-formed but rejected
//! - [`PaymentError::NotFound`]: no payment exists for the requested id
//! - [`PaymentError::Store`]: the storage backend failed
//!
//! # Example
//!
//! ```rust,ignore
//! use payments::prelude::*;
//!
//! match service.get_payment(42).await {
//!     Ok(payment) => println!("Found: {:?}", payment),
//!     Err(PaymentError::NotFound { id }) => println!("Payment {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::http::StatusCode;
use thiserror::Error;

/// Result alias used by the repository and service layers
pub type Result<T, E = PaymentError> = std::result::Result<T, E>;

/// Message carried by the validation error raised for non-positive amounts
pub const INVALID_AMOUNT: &str = "invalid payment amount";

/// The closed set of errors produced by the payments core
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Input was rejected by service-level validation
    #[error("{message}")]
    Validation { message: String },

    /// No payment row matches the identifier
    #[error("payment with id '{id}' not found")]
    NotFound { id: u64 },

    /// The storage backend failed (connection, constraint, decoding...)
    #[error("failed to {operation} payment: {message}")]
    Store { operation: String, message: String },
}

impl PaymentError {
    /// Build a validation error with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        PaymentError::Validation {
            message: message.into(),
        }
    }

    /// Build a storage error for the named operation
    pub fn store(operation: impl Into<String>, message: impl ToString) -> Self {
        PaymentError::Store {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Validation { .. } => StatusCode::BAD_REQUEST,
            PaymentError::NotFound { .. } => StatusCode::NOT_FOUND,
            PaymentError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PaymentError::Validation { .. } => "VALIDATION_ERROR",
            PaymentError::NotFound { .. } => "PAYMENT_NOT_FOUND",
            PaymentError::Store { .. } => "STORAGE_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PaymentError::NotFound { .. })
    }
}
