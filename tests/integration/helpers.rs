//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use registry_api::state::AppState;
use registry_auth::test_support::ManualClock;
use registry_core::config::AppConfig;
use registry_store::MemoryUserStore;

/// Fixed starting instant for the test clock.
pub const TEST_EPOCH: i64 = 1_760_000_000;

const TEST_CONFIG: &str = r#"
[auth]
jwt_secret = "integration-test-secret"
"#;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the store behind the router
    pub store: MemoryUserStore,
    /// Clock driving token issuance and expiry
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// Create a new test application with an empty store
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        config.validate().expect("Test config should be valid");

        let store = MemoryUserStore::new();
        let clock = Arc::new(ManualClock::at_timestamp(TEST_EPOCH));

        let state = AppState::new(config, Arc::new(store.clone()), clock.clone());
        let router = registry_api::build_router(state);

        Self {
            router,
            store,
            clock,
        }
    }

    /// Create a user through the API and return its record
    pub async fn create_user(&self, name: &str, email: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/api/users",
                Some(serde_json::json!({ "name": name, "email": email })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );

        response.body["data"].clone()
    }

    /// Authenticate and return the issued token
    pub async fn token_for(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth",
                Some(serde_json::json!({ "email": email })),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["data"]["code"], 200, "{:?}", response.body);

        response.body["data"]["token"]
            .as_str()
            .expect("No token in authentication response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
