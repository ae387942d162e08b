//! Core module containing the payment model, error kinds and layer traits

pub mod error;
pub mod payment;
pub mod repository;
pub mod service;

pub use error::{PaymentError, Result};
pub use payment::{NewPayment, Payment, PaymentRequest};
pub use repository::PaymentRepository;
pub use service::{PaymentManager, PaymentService};
