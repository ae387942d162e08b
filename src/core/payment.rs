//! Payment entity and request DTO

use serde::{Deserialize, Serialize};

/// A persisted payment
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub amount: f64,
    pub currency: String,
}

/// Inbound payload for create and update
///
/// Absent fields decode to their zero values, so `{}` is accepted by the
/// decoder and rejected later by amount validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
}

/// Id-less record handed to the repository on create and update
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub amount: f64,
    pub currency: String,
}

impl NewPayment {
    /// Attach a storage-assigned id
    pub fn with_id(self, id: u64) -> Payment {
        Payment {
            id,
            amount: self.amount,
            currency: self.currency,
        }
    }
}

impl From<PaymentRequest> for NewPayment {
    fn from(request: PaymentRequest) -> Self {
        Self {
            amount: request.amount,
            currency: request.currency,
        }
    }
}
