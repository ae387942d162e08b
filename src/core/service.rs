//! Service layer: request validation in front of the repository

use crate::core::error::{INVALID_AMOUNT, PaymentError, Result};
use crate::core::payment::{NewPayment, Payment, PaymentRequest};
use crate::core::repository::PaymentRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Service trait consumed by the HTTP handlers
///
/// Implementations validate requests and delegate to storage. Errors coming
/// back from storage are returned unchanged.
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Validate and persist a new payment
    async fn create_payment(&self, request: PaymentRequest) -> Result<Payment>;

    /// Get a payment by ID
    async fn get_payment(&self, id: u64) -> Result<Payment>;

    /// Validate and overwrite an existing payment
    async fn update_payment(&self, id: u64, request: PaymentRequest) -> Result<()>;

    /// Delete a payment
    async fn delete_payment(&self, id: u64) -> Result<()>;
}

/// Default [`PaymentService`] over any [`PaymentRepository`]
///
/// # Example
///
/// ```rust,ignore
/// let repo = InMemoryPaymentRepository::new();
/// let service = PaymentManager::new(Arc::new(repo));
/// service.create_payment(PaymentRequest { amount: 10.0, currency: "USD".into() }).await?;
/// ```
#[derive(Clone)]
pub struct PaymentManager {
    repository: Arc<dyn PaymentRepository>,
}

impl PaymentManager {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }
}

/// Reject amounts that are not strictly positive
///
/// NaN fails the comparison and is rejected too.
pub fn validate_request(request: &PaymentRequest) -> Result<()> {
    if request.amount > 0.0 {
        Ok(())
    } else {
        Err(PaymentError::validation(INVALID_AMOUNT))
    }
}

#[async_trait]
impl PaymentService for PaymentManager {
    async fn create_payment(&self, request: PaymentRequest) -> Result<Payment> {
        validate_request(&request)?;
        self.repository.create(NewPayment::from(request)).await
    }

    async fn get_payment(&self, id: u64) -> Result<Payment> {
        self.repository.get_by_id(id).await
    }

    async fn update_payment(&self, id: u64, request: PaymentRequest) -> Result<()> {
        validate_request(&request)?;
        self.repository.update(id, NewPayment::from(request)).await
    }

    async fn delete_payment(&self, id: u64) -> Result<()> {
        self.repository.delete(id).await
    }
}
