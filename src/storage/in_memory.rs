//! In-memory implementation of PaymentRepository for testing and development

use crate::core::error::{PaymentError, Result};
use crate::core::payment::{NewPayment, Payment};
use crate::core::repository::PaymentRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Table {
    rows: HashMap<u64, Payment>,
    last_id: u64,
}

/// In-memory payment repository
///
/// Ids come from a sequence starting at 1, like a `BIGSERIAL` column.
/// Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryPaymentRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryPaymentRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments
    ///
    /// A poisoned lock still holds every committed row, so it is read through.
    pub fn len(&self) -> usize {
        match self.table.read() {
            Ok(table) => table.rows.len(),
            Err(poisoned) => poisoned.into_inner().rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn create(&self, payment: NewPayment) -> Result<Payment> {
        let mut table = self
            .table
            .write()
            .map_err(|e| PaymentError::store("create", format!("lock poisoned: {}", e)))?;

        table.last_id += 1;
        let payment = payment.with_id(table.last_id);
        table.rows.insert(payment.id, payment.clone());

        Ok(payment)
    }

    async fn get_by_id(&self, id: u64) -> Result<Payment> {
        let table = self
            .table
            .read()
            .map_err(|e| PaymentError::store("get", format!("lock poisoned: {}", e)))?;

        table
            .rows
            .get(&id)
            .cloned()
            .ok_or(PaymentError::NotFound { id })
    }

    async fn update(&self, id: u64, payment: NewPayment) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| PaymentError::store("update", format!("lock poisoned: {}", e)))?;

        match table.rows.get_mut(&id) {
            Some(row) => {
                row.amount = payment.amount;
                row.currency = payment.currency;
            }
            None => tracing::debug!(id, "update matched no payment"),
        }

        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| PaymentError::store("delete", format!("lock poisoned: {}", e)))?;

        if table.rows.remove(&id).is_none() {
            tracing::debug!(id, "delete matched no payment");
        }

        Ok(())
    }
}
