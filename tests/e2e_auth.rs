// tests/e2e_auth.rs
use atelier_cms::application::ports::security::IdTokenVerifier;
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

mod support;

use support::{ADMIN_EMAIL, ADMIN_PASSWORD, StaticVerifier, login, make_test_app, send_json};

#[tokio::test]
async fn login_returns_token_and_user() {
    let app = make_test_app().await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
    assert!(body["token"]["token"].as_str().is_some());
    assert!(body["token"]["expiresIn"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = make_test_app().await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": "wrong-password" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn login_with_unknown_account_is_401() {
    let app = make_test_app().await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "whatever-12" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_login_email_is_400() {
    let app = make_test_app().await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "not-an-email", "password": "whatever-12" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn current_user_requires_valid_token() {
    let app = make_test_app().await;

    let (status, _) = send_json(&app.router, "GET", "/api/auth/user", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) =
        send_json(&app.router, "GET", "/api/auth/user", Some("bad-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app.router).await;
    let (status, body) =
        send_json(&app.router, "GET", "/api/auth/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn change_password_rejects_short_and_unchanged_values() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn change_password_rejects_wrong_current_password() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({ "currentPassword": "guessed-wrong-1", "newPassword": "brand-new-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_rotates_credentials_and_issues_fresh_token() {
    let app = make_test_app().await;
    let token = login(&app.router).await;
    let new_password = "vento-di-marzo-2025";

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/auth/change-password",
        Some(&token),
        Some(json!({ "currentPassword": ADMIN_PASSWORD, "newPassword": new_password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "change failed: {body}");
    let fresh_token = body["token"]["token"].as_str().unwrap().to_string();

    // Fresh token works against an authenticated endpoint.
    let (status, _) =
        send_json(&app.router, "GET", "/api/auth/user", Some(&fresh_token), None).await;
    assert_eq!(status, StatusCode::OK);

    // The old password no longer logs in; the new one does.
    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": ADMIN_EMAIL, "password": new_password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_always_succeeds() {
    let app = make_test_app().await;
    let (status, body) = send_json(&app.router, "POST", "/api/auth/logout", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().is_some());
}

#[tokio::test]
async fn google_login_exchanges_verified_identity_for_local_token() {
    let verifier: Arc<dyn IdTokenVerifier> = Arc::new(StaticVerifier {
        token: "good-google-token".into(),
        email: ADMIN_EMAIL.into(),
    });
    let app = support::make_test_app_with_verifier(Some(verifier)).await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/auth/google",
        None,
        Some(json!({ "idToken": "good-google-token" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "google login failed: {body}");
    let token = body["token"]["token"].as_str().unwrap().to_string();

    let (status, _) = send_json(&app.router, "GET", "/api/auth/user", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn google_login_rejects_unknown_identity_and_bad_tokens() {
    let verifier: Arc<dyn IdTokenVerifier> = Arc::new(StaticVerifier {
        token: "good-google-token".into(),
        email: "stranger@example.com".into(),
    });
    let app = support::make_test_app_with_verifier(Some(verifier)).await;

    // Verified identity, but no matching local account.
    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/google",
        None,
        Some(json!({ "idToken": "good-google-token" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/google",
        None,
        Some(json!({ "idToken": "forged" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn google_login_without_configuration_is_500() {
    let app = make_test_app().await;

    let (status, _) = send_json(
        &app.router,
        "POST",
        "/api/auth/google",
        None,
        Some(json!({ "idToken": "anything" })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
