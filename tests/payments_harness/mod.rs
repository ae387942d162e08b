//! Shared test harness for payment repository backends
//!
//! Provides two macros that any backend can invoke with a factory
//! expression producing an `impl PaymentRepository + 'static`:
//!
//! - `repository_tests!`: the repository contract, called directly
//! - `rest_integration_tests!`: full HTTP round-trips through the router
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod payments_harness;
//! repository_tests!(InMemoryPaymentRepository::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod rest_tests;

use payments::core::payment::NewPayment;

/// Build an id-less payment for repository calls
pub fn new_payment(amount: f64, currency: &str) -> NewPayment {
    NewPayment {
        amount,
        currency: currency.to_string(),
    }
}

/// Generate the repository contract suite for a storage backend.
///
/// # Generated Tests
///
/// - `test_create_assigns_id`: created rows carry a store-assigned id
/// - `test_get_round_trip`: get returns what create stored
/// - `test_get_missing_is_not_found`
/// - `test_update_overwrites_amount_and_currency`
/// - `test_update_missing_row_succeeds`: no-row-affected quirk
/// - `test_delete_then_get_is_not_found`
/// - `test_delete_twice_succeeds`: no-row-affected quirk
#[macro_export]
macro_rules! repository_tests {
    ($repo_factory:expr) => {
        mod repository_tests {
            use super::*;
            use payments::core::error::PaymentError;
            use payments::core::repository::PaymentRepository;
            use crate::payments_harness::new_payment;

            #[tokio::test]
            async fn test_create_assigns_id() {
                let repo = $repo_factory;

                let first = repo.create(new_payment(100.5, "USD")).await.unwrap();
                let second = repo.create(new_payment(3.0, "EUR")).await.unwrap();

                assert_ne!(first.id, second.id);
                assert_eq!(first.amount, 100.5);
                assert_eq!(first.currency, "USD");
            }

            #[tokio::test]
            async fn test_get_round_trip() {
                let repo = $repo_factory;
                let created = repo.create(new_payment(100.5, "USD")).await.unwrap();

                let fetched = repo.get_by_id(created.id).await.unwrap();

                assert_eq!(fetched, created);
            }

            #[tokio::test]
            async fn test_get_missing_is_not_found() {
                let repo = $repo_factory;

                let err = repo.get_by_id(987_654).await.unwrap_err();

                assert!(matches!(err, PaymentError::NotFound { id: 987_654 }));
            }

            #[tokio::test]
            async fn test_update_overwrites_amount_and_currency() {
                let repo = $repo_factory;
                let created = repo.create(new_payment(100.0, "USD")).await.unwrap();

                repo.update(created.id, new_payment(200.0, "EUR"))
                    .await
                    .unwrap();

                let fetched = repo.get_by_id(created.id).await.unwrap();
                assert_eq!(fetched.id, created.id);
                assert_eq!(fetched.amount, 200.0);
                assert_eq!(fetched.currency, "EUR");
            }

            #[tokio::test]
            async fn test_update_missing_row_succeeds() {
                let repo = $repo_factory;

                repo.update(987_654, new_payment(1.0, "USD")).await.unwrap();

                assert!(repo.get_by_id(987_654).await.unwrap_err().is_not_found());
            }

            #[tokio::test]
            async fn test_delete_then_get_is_not_found() {
                let repo = $repo_factory;
                let created = repo.create(new_payment(10.0, "USD")).await.unwrap();

                repo.delete(created.id).await.unwrap();

                assert!(repo.get_by_id(created.id).await.unwrap_err().is_not_found());
            }

            #[tokio::test]
            async fn test_delete_twice_succeeds() {
                let repo = $repo_factory;
                let created = repo.create(new_payment(10.0, "USD")).await.unwrap();

                repo.delete(created.id).await.unwrap();
                repo.delete(created.id).await.unwrap();
            }
        }
    };
}
