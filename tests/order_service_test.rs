use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use user_order_services::framework::mock::MockLookup;
use user_order_services::framework::LookupError;
use user_order_services::lifecycle::OrderServiceApp;
use user_order_services::model::{Order, User};

/// Real order service over HTTP with a mocked user lookup.
/// This tests the create path's validation while isolating it from the user service.
///
/// Pattern 2: Service + Mocks
/// - Real order service (routes, store, error mapping)
/// - Mocked user lookup (isolates the dependency)
#[tokio::test]
async fn test_order_service_with_mocked_user_lookup() {
    // Setup mock dependency
    let users = MockLookup::<User>::new();
    users.expect_exists("7").return_ok(true);
    users.expect_exists("8").return_ok(false);
    users
        .expect_exists("9")
        .return_err(LookupError::UnexpectedStatus(503));

    let app = OrderServiceApp::new(Arc::new(users.clone()));
    let store = app.orders.clone();
    let service = app.spawn("127.0.0.1:0".parse().unwrap()).await.unwrap();
    let url = format!("{}/orders", service.base_url());
    let http = reqwest::Client::new();

    // Known user
    let order = Order::new("10", "7", "Monitor", 2, 300.0);
    let response = http.post(&url).json(&order).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.get("10"), Some(order));

    // Unknown user
    let response = http
        .post(&url)
        .json(&Order::new("11", "8", "Cable", 1, 5.0))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "User does not exist" }));

    // Lookup failure
    let response = http
        .post(&url)
        .json(&Order::new("12", "9", "Cable", 1, 5.0))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "error": "Failed to validate user: unexpected status 503" })
    );

    // Only the seeded orders and the accepted one are stored
    assert_eq!(store.len(), 3);
    assert_eq!(users.calls(), vec!["7", "8", "9"]);
    users.verify();

    service.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_service_health() {
    let app = OrderServiceApp::new(Arc::new(MockLookup::<User>::new()));
    let service = app.spawn("127.0.0.1:0".parse().unwrap()).await.unwrap();

    let body: Value = reqwest::get(format!("{}/health", service.base_url()))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({ "status": "healthy", "service": "order-service" }));

    service.shutdown().await.unwrap();
}
