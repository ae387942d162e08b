//! # Payments API
//!
//! A layered CRUD service for a single `payment` resource, exposed over
//! HTTP with JSON payloads and backed by a relational store.
//!
//! ## Layers
//!
//! - **Handler** ([`server::handlers`]): decodes JSON bodies and path ids,
//!   maps service outcomes to status codes
//! - **Service** ([`core::service`]): validates requests, delegates to storage
//! - **Repository** ([`core::repository`]): one statement per operation
//!   against the store ([`storage::postgres`] or [`storage::in_memory`])
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payments::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_repository(InMemoryPaymentRepository::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::PaymentError,
        payment::{NewPayment, Payment, PaymentRequest},
        repository::PaymentRepository,
        service::{PaymentManager, PaymentService},
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryPaymentRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::{PostgresPaymentRepository, ensure_schema};

    // === Config ===
    pub use crate::config::{AppConfig, DatabaseConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{PaymentAppState, ServerBuilder, build_router};

    // === External dependencies ===
    pub use async_trait::async_trait;
}
