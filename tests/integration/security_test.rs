//! Injection and script payloads must never produce a server error or a stored record.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_sql_injection_login_is_rejected_cleanly() {
    let app = TestApp::new().await;

    for username in ["testuser' OR 1=1;--", "admin; DROP TABLE Users;--"] {
        let response = app
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({ "username": username, "password": "x" })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{username}");
    }

    // Table still intact.
    assert!(app.stored_user("admin").await.is_some());
}

#[tokio::test]
async fn test_injection_username_is_not_persisted() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({
                "username": "test'; DROP TABLE Users;--",
                "password": "pw",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.listed_usernames(&token).await, vec!["admin"]);
}

#[tokio::test]
async fn test_script_payloads_are_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    for username in ["evil<script>", "<script>alert('xss')</script>", "x onload"] {
        let response = app
            .request(
                "POST",
                "/api/auth/add-user",
                Some(serde_json::json!({ "username": username, "password": "pw" })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{username}");
    }

    let response = app
        .request(
            "POST",
            "/api/auth/add-user",
            Some(serde_json::json!({
                "username": "xss_email",
                "password": "pw",
                "email": "<img src=x onerror=alert('xss')>",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    assert_eq!(app.listed_usernames(&token).await, vec!["admin"]);
}

#[tokio::test]
async fn test_unsafe_delete_path_is_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "DELETE",
            "/api/auth/delete-user/evil%3Cscript%3E",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
