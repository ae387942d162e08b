//! HTTP layer: handlers, response helpers, router and server builder

pub mod builder;
pub mod handlers;
pub mod response;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::PaymentAppState;
pub use router::build_router;
