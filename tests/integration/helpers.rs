//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use safevault_api::{AppState, build_app};
use safevault_core::config::{AppConfig, DatabaseConfig};
use safevault_database::{CredentialStore, DatabasePool, UserRepository};
use safevault_entity::user::UserRecord;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct access to the store behind the router
    pub store: UserRepository,
}

impl TestApp {
    /// Create a new test application backed by a private in-memory database
    pub async fn new() -> Self {
        let mut config = AppConfig::with_secret(TEST_SECRET);
        config.database = DatabaseConfig::in_memory();
        config.validate().expect("Test config must be valid");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open in-memory database");
        let store = UserRepository::new(db.pool().clone());

        let state = AppState::initialize(config, db)
            .await
            .expect("Failed to bootstrap credential store");

        Self {
            router: build_app(state),
            store,
        }
    }

    /// Looks a user up directly in the store
    pub async fn stored_user(&self, username: &str) -> Option<UserRecord> {
        self.store
            .get_by_username(username)
            .await
            .expect("Store lookup failed")
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Login as the bootstrap administrator
    pub async fn admin_token(&self) -> String {
        self.login("admin", "admin").await
    }

    /// Adds a user through the API and asserts success
    pub async fn add_user(&self, token: &str, username: &str, password: &str, role: &str) {
        let response = self
            .request(
                "POST",
                "/api/auth/add-user",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                    "role": role,
                })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Add user failed: {:?}",
            response.body
        );
    }

    /// Usernames currently returned by the list endpoint
    pub async fn listed_usernames(&self, token: &str) -> Vec<String> {
        let response = self
            .request("GET", "/api/auth/users", None, Some(token))
            .await;
        assert_eq!(response.status, StatusCode::OK);

        response.body["data"]
            .as_array()
            .expect("User list is not an array")
            .iter()
            .filter_map(|u| u["username"].as_str().map(String::from))
            .collect()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
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
