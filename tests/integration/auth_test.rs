//! Integration tests for the login and identity flow.

use chrono::{Duration, Utc};
use http::StatusCode;
use safevault_auth::TokenService;
use safevault_entity::user::UserRole;

use crate::helpers::{TEST_SECRET, TestApp};

#[tokio::test]
async fn test_admin_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "admin",
                "password": "admin",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["username"], "admin");
    assert_eq!(response.body["data"]["role"], "Admin");
    assert!(response.body["data"]["token"].as_str().is_some());
    assert!(response.body["data"]["expires_at"].as_str().is_some());
}

#[tokio::test]
async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
    let app = TestApp::new().await;

    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "admin", "password": "nope" })),
            None,
        )
        .await;
    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "notarealuser", "password": "wrongpass" })),
            None,
        )
        .await;

    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.body, unknown.body);
}

#[tokio::test]
async fn test_empty_credentials_are_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_whitespace_password_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "admin", "password": "   " })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!(["admin", "admin"])),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_returns_identity() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "admin");
    assert_eq!(response.body["data"]["role"], "Admin");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new().await;

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_and_foreign_tokens_are_rejected() {
    let app = TestApp::new().await;

    let expired = TokenService::new(TEST_SECRET)
        .issue_at("admin", UserRole::Admin, Utc::now() - Duration::hours(2))
        .unwrap();
    let response = app
        .request("GET", "/api/auth/users", None, Some(&expired.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let foreign = TokenService::new("a-different-secret-0123456789abcdef")
        .issue("admin", UserRole::Admin)
        .unwrap();
    let response = app
        .request("GET", "/api/auth/users", None, Some(&foreign.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["database"], "connected");
}
