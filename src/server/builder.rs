//! ServerBuilder for fluent API to build the HTTP server

use super::router::build_router;
use crate::config::ServerConfig;
use crate::core::repository::PaymentRepository;
use crate::core::service::{PaymentManager, PaymentService};
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the payments HTTP server
///
/// The repository (or a ready-made service) is injected by the caller, so
/// the storage handle's lifecycle stays with the process entry point.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_repository(InMemoryPaymentRepository::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    service: Option<Arc<dyn PaymentService>>,
    config: ServerConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            service: None,
            config: ServerConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Use a repository behind the default [`PaymentManager`]
    pub fn with_repository(self, repository: impl PaymentRepository + 'static) -> Self {
        self.with_service(PaymentManager::new(Arc::new(repository)))
    }

    /// Use a custom service implementation
    pub fn with_service(mut self, service: impl PaymentService + 'static) -> Self {
        self.service = Some(Arc::new(service));
        self
    }

    /// Set server settings (timeouts, bind address)
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Merge extra routes next to the payment routes
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    pub fn build(self) -> Result<Router> {
        let service = self
            .service
            .ok_or_else(|| anyhow!("Payment service or repository is required"))?;

        let mut app = build_router(service, &self.config);
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_addr.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
