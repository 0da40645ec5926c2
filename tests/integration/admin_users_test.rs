//! Integration tests for user administration.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_add_list_delete_user() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({
                "username": "alice",
                "password": "P@ss1",
                "role": "User",
                "email": "a@x.io",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["username"], "alice");
    assert_eq!(response.body["data"]["email"], "a@x.io");

    let stored = app.stored_user("alice").await.expect("alice not stored");
    assert_ne!(stored.password_hash, "P@ss1");
    assert!(stored.password_hash.starts_with("$argon2id$"));

    let users = app
        .request("GET", "/api/auth/users", None, Some(&token))
        .await;
    assert_eq!(users.status, StatusCode::OK);
    let alice = users.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "alice")
        .expect("alice not listed")
        .clone();
    assert_eq!(alice["role"], "User");
    assert!(alice.get("password_hash").is_none());

    let response = app
        .request("DELETE", "/api/auth/delete-user/alice", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!app.listed_usernames(&token).await.contains(&"alice".to_string()));
}

#[tokio::test]
async fn test_new_user_can_log_in() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.add_user(&token, "bob", "Test123!", "user").await;

    let bob = app.login("bob", "Test123!").await;
    let me = app.request("GET", "/api/auth/me", None, Some(&bob)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["username"], "bob");
    assert_eq!(me.body["data"]["role"], "User");
}

#[tokio::test]
async fn test_user_token_is_forbidden_on_admin_endpoints() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.add_user(&token, "testuser_forbidden", "Test123!", "User")
        .await;
    let user_token = app.login("testuser_forbidden", "Test123!").await;

    let list = app
        .request("GET", "/api/auth/users", None, Some(&user_token))
        .await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);

    let add = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({ "username": "sneaky", "password": "x" })),
            Some(&user_token),
        )
        .await;
    assert_eq!(add.status, StatusCode::FORBIDDEN);

    let add_garbage = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!("not an object")),
            Some(&user_token),
        )
        .await;
    assert_eq!(add_garbage.status, StatusCode::FORBIDDEN);

    let delete = app
        .request(
            "DELETE",
            "/api/auth/delete-user/admin",
            None,
            Some(&user_token),
        )
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    assert!(app.stored_user("sneaky").await.is_none());
    assert!(app.stored_user("admin").await.is_some());
}

#[tokio::test]
async fn test_admin_endpoints_require_token() {
    let app = TestApp::new().await;

    let list = app.request("GET", "/api/auth/users", None, None).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);

    let add = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({ "username": "x", "password": "y" })),
            None,
        )
        .await;
    assert_eq!(add.status, StatusCode::UNAUTHORIZED);

    let delete = app
        .request("DELETE", "/api/auth/delete-user/admin", None, None)
        .await;
    assert_eq!(delete.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_cannot_be_deleted() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("DELETE", "/api/auth/delete-user/admin", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "PROTECTED_RESOURCE");
    assert!(app.stored_user("admin").await.is_some());
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request("DELETE", "/api/auth/delete-user/ghost", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    app.add_user(&token, "carol", "pw", "User").await;

    let response = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({ "username": "carol", "password": "pw2" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_adds_yield_one_success() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;
    let body = serde_json::json!({ "username": "dup", "password": "pw" });

    let (a, b) = futures::join!(
        app.request("POST", "/api/auth/add-user", Some(body.clone()), Some(&token)),
        app.request("POST", "/api/auth/add-user", Some(body.clone()), Some(&token))
    );

    let mut statuses = [a.status, b.status];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::CONFLICT]);
}

#[tokio::test]
async fn test_invalid_role_and_email_are_bad_request() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let role = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({ "username": "dave", "password": "pw", "role": "root" })),
            Some(&token),
        )
        .await;
    assert_eq!(role.status, StatusCode::BAD_REQUEST);

    let email = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({ "username": "dave", "password": "pw", "email": "dave" })),
            Some(&token),
        )
        .await;
    assert_eq!(email.status, StatusCode::BAD_REQUEST);

    let padded = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({
                "username": "dave",
                "password": "pw",
                "email": "  dave@example.com  "
            })),
            Some(&token),
        )
        .await;
    assert_eq!(padded.status, StatusCode::BAD_REQUEST);
    assert!(app.stored_user("dave").await.is_none());
}
