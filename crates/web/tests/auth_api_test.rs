//! Sign-in, session and logout endpoint tests.

mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{app, get, post, post_json, send, with_bearer, with_cookie, ADMIN_TOKEN, CUSTOMER_TOKEN};

#[tokio::test]
async fn logout_expires_auth_token_cookie() {
    let app = app();
    let response = send(&app.router, post("/api/auth/logout")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "message": "Logged out successfully" }));

    let cookies = response.set_cookies();
    let auth = cookies
        .iter()
        .find(|c| c.starts_with("authToken="))
        .expect("authToken cookie is set");
    assert!(auth.starts_with("authToken=;"));
    assert!(auth.contains("Path=/"));
    assert!(auth.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
}

#[tokio::test]
async fn logout_also_expires_session_cookie() {
    let app = app();
    let request = with_cookie(post("/api/auth/logout"), "session_token=customer-token");
    let response = send(&app.router, request).await;

    let cookies = response.set_cookies();
    let session = cookies
        .iter()
        .find(|c| c.starts_with("session_token="))
        .expect("session cookie is set");
    assert!(session.starts_with("session_token=;"));
    assert!(session.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
}

#[tokio::test]
async fn session_is_empty_object_without_token() {
    let app = app();
    let response = send(&app.router, get("/api/auth/session")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn session_is_empty_object_for_unknown_token() {
    let app = app();
    let response = send(&app.router, with_bearer(get("/api/auth/session"), "forged")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn session_resolves_bearer_token() {
    let app = app();
    let response = send(&app.router, with_bearer(get("/api/auth/session"), CUSTOMER_TOKEN)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["role"], "CUSTOMER");
    assert_eq!(response.body["user"]["email"], "ana@example.com");
    assert!(response.body["expires"].is_string());
    assert_eq!(response.body["profile"]["role"], "CUSTOMER");
}

#[tokio::test]
async fn session_resolves_cookie_token() {
    let app = app();
    let request = with_cookie(get("/api/auth/session"), &format!("session_token={}", ADMIN_TOKEN));
    let response = send(&app.router, request).await;

    assert_eq!(response.body["user"]["role"], "ADMIN");
}

#[tokio::test]
async fn sign_in_sets_session_cookie() {
    let app = app();
    let response = send(
        &app.router,
        post_json(
            "/api/auth/signin",
            json!({ "email": "ana@example.com", "password": "correct horse" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["access_token"], CUSTOMER_TOKEN);
    assert_eq!(response.body["token_type"], "Bearer");
    assert_eq!(response.body["session"]["user"]["role"], "CUSTOMER");

    let cookies = response.set_cookies();
    let cookie = cookies
        .iter()
        .find(|c| c.starts_with("session_token="))
        .expect("session cookie is set");
    assert!(cookie.starts_with(&format!("session_token={};", CUSTOMER_TOKEN)));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_unauthorized() {
    let app = app();
    let response = send(
        &app.router,
        post_json(
            "/api/auth/signin",
            json!({ "email": "ana@example.com", "password": "battery staple" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "INVALID_CREDENTIALS");
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn sign_in_to_inactive_account_is_forbidden() {
    let app = app();
    let response = send(
        &app.router,
        post_json(
            "/api/auth/signin",
            json!({ "email": "banned@example.com", "password": "whatever1" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn sign_in_validates_email() {
    let app = app();
    let response = send(
        &app.router,
        post_json(
            "/api/auth/signin",
            json!({ "email": "not-an-email", "password": "whatever1" }),
        ),
    )
    .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response.body["error"]["message"], "Invalid email format");
}
