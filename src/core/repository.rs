//! Repository trait for payment persistence

use crate::core::error::Result;
use crate::core::payment::{NewPayment, Payment};
use async_trait::async_trait;

/// Storage contract for payments, keyed by `id`
///
/// Implementations own no business logic: each call issues a single
/// statement against the store and reports failures as
/// [`PaymentError::Store`](crate::core::error::PaymentError::Store).
///
/// `update` and `delete` succeed when no row matches the id. Callers that
/// need to tell "nothing changed" apart from "one row changed" must read
/// first.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Insert a new row; the store assigns the id
    async fn create(&self, payment: NewPayment) -> Result<Payment>;

    /// Fetch exactly one row, or `NotFound`
    async fn get_by_id(&self, id: u64) -> Result<Payment>;

    /// Overwrite amount and currency of the matching row
    async fn update(&self, id: u64, payment: NewPayment) -> Result<()>;

    /// Remove the matching row
    async fn delete(&self, id: u64) -> Result<()>;
}
