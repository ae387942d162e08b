//! REST integration test macro for payment repositories.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run a
//! `PaymentRepository` through the real router:
//! JSON → HTTP request → handler → service → repository → HTTP response → JSON.

/// Generate a REST integration test suite for a storage backend.
///
/// `$repo_factory` must produce an `impl PaymentRepository + 'static`.
///
/// # Generated Tests
///
/// - `test_rest_create`: POST 201 + status body
/// - `test_rest_create_rejects_zero_amount`: POST 400, nothing stored
/// - `test_rest_get_missing`: GET 404 + error body
/// - `test_rest_round_trip`: POST then GET returns the same amount/currency
/// - `test_rest_update_then_get`: PUT 200, GET reflects the new amount
/// - `test_rest_delete_twice`: DELETE 200 both times, then GET 404
#[macro_export]
macro_rules! rest_integration_tests {
    ($repo_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use payments::core::repository::PaymentRepository;
            use payments::server::ServerBuilder;
            use serde_json::{Value, json};
            use std::sync::Arc;

            /// Server plus a handle on the same repository for direct reads
            async fn make_server() -> (TestServer, Arc<dyn PaymentRepository>) {
                let repo: Arc<dyn PaymentRepository> = Arc::new($repo_factory);
                let router = ServerBuilder::new()
                    .with_service(payments::core::service::PaymentManager::new(repo.clone()))
                    .build()
                    .unwrap();
                (TestServer::new(router).unwrap(), repo)
            }

            /// Create through HTTP and return the id assigned by the store
            async fn create_via_http(
                server: &TestServer,
                repo: &Arc<dyn PaymentRepository>,
                amount: f64,
                currency: &str,
            ) -> u64 {
                server
                    .post("/payments")
                    .json(&json!({ "amount": amount, "currency": currency }))
                    .await
                    .assert_status(StatusCode::CREATED);

                // The create response carries no id, so probe the store with
                // a marker payment to learn where the sequence is.
                let marker = repo
                    .create(crate::payments_harness::new_payment(1.0, "MARK"))
                    .await
                    .unwrap();
                repo.delete(marker.id).await.unwrap();
                marker.id - 1
            }

            #[tokio::test]
            async fn test_rest_create() {
                let (server, _repo) = make_server().await;

                let response = server
                    .post("/payments")
                    .json(&json!({ "amount": 100.5, "currency": "USD" }))
                    .await;

                response.assert_status(StatusCode::CREATED);
                response.assert_json(&json!({ "status": "Payment created" }));
            }

            #[tokio::test]
            async fn test_rest_create_rejects_zero_amount() {
                let (server, repo) = make_server().await;

                let response = server
                    .post("/payments")
                    .json(&json!({ "amount": 0, "currency": "USD" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                response.assert_json(&json!({ "error": "invalid payment amount" }));

                // Nothing was written: the id just before the probe is free
                let probe = repo
                    .create(crate::payments_harness::new_payment(1.0, "USD"))
                    .await
                    .unwrap();
                assert!(repo.get_by_id(probe.id).await.is_ok());
                assert!(repo.get_by_id(probe.id - 1).await.unwrap_err().is_not_found());
            }

            #[tokio::test]
            async fn test_rest_get_missing() {
                let (server, _repo) = make_server().await;

                let response = server.get("/payments/987654").await;

                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_json(&json!({ "error": "Payment not found" }));
            }

            #[tokio::test]
            async fn test_rest_round_trip() {
                let (server, repo) = make_server().await;
                let id = create_via_http(&server, &repo, 100.5, "USD").await;

                let response = server.get(&format!("/payments/{}", id)).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["amount"], 100.5);
                assert_eq!(body["currency"], "USD");
            }

            #[tokio::test]
            async fn test_rest_update_then_get() {
                let (server, repo) = make_server().await;
                let id = create_via_http(&server, &repo, 100.0, "USD").await;

                let response = server
                    .put(&format!("/payments/{}", id))
                    .json(&json!({ "amount": 200, "currency": "USD" }))
                    .await;
                response.assert_status(StatusCode::OK);
                response.assert_json(&json!({ "status": "Payment updated" }));

                let body: Value = server.get(&format!("/payments/{}", id)).await.json();
                assert_eq!(body["amount"], 200.0);
            }

            #[tokio::test]
            async fn test_rest_delete_twice() {
                let (server, repo) = make_server().await;
                let id = create_via_http(&server, &repo, 5.0, "USD").await;

                for _ in 0..2 {
                    let response = server.delete(&format!("/payments/{}", id)).await;
                    response.assert_status(StatusCode::OK);
                    response.assert_json(&json!({ "status": "Payment deleted" }));
                }

                server
                    .get(&format!("/payments/{}", id))
                    .await
                    .assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}
