// tests/support/mod.rs
//
// Not every e2e binary exercises every helper.
#![allow(dead_code)]

pub mod repos;

use std::{sync::Arc, time::Duration};

use atelier_cms::application::{
    dto::VerifiedIdentity,
    error::{ApplicationError, ApplicationResult},
    ports::security::IdTokenVerifier,
    services::{ApplicationServices, Dependencies},
};
use atelier_cms::infrastructure::{
    security::{Argon2PasswordHasher, JwtTokenManager},
    storage::LocalFileStore,
    time::SystemClock,
};
use atelier_cms::presentation::http::{routes::build_router, state::HttpState};
use async_trait::async_trait;
use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt as _;

pub const ADMIN_EMAIL: &str = "valentina@example.com";
pub const ADMIN_PASSWORD: &str = "rosso-di-sera-1984";
const TEST_JWT_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub struct TestApp {
    pub router: Router,
    // Held so the upload directory outlives the test.
    _storage_dir: TempDir,
}

/// Stand-in for the Google verifier: accepts exactly one fixed token.
pub struct StaticVerifier {
    pub token: String,
    pub email: String,
}

#[async_trait]
impl IdTokenVerifier for StaticVerifier {
    async fn verify(&self, id_token: &str) -> ApplicationResult<VerifiedIdentity> {
        if id_token == self.token {
            Ok(VerifiedIdentity {
                subject: "google-subject-1".into(),
                email: self.email.clone(),
                display_name: Some("Valentina".into()),
                photo_url: None,
            })
        } else {
            Err(ApplicationError::unauthorized("invalid id token"))
        }
    }
}

pub async fn make_test_app() -> TestApp {
    make_test_app_with_verifier(None).await
}

pub async fn make_test_app_with_verifier(
    id_token_verifier: Option<Arc<dyn IdTokenVerifier>>,
) -> TestApp {
    let storage_dir = TempDir::new().expect("tempdir");
    let clock = Arc::new(SystemClock);

    let blog = Arc::new(repos::InMemoryBlogRepo::default());
    let portfolio = Arc::new(repos::InMemoryPortfolioRepo::default());
    let pages = Arc::new(repos::InMemoryPageRepo::default());

    let services = Arc::new(ApplicationServices::new(Dependencies {
        users: Arc::new(repos::InMemoryUserRepo::default()),
        blog_read: blog.clone(),
        blog_write: blog,
        categories: Arc::new(repos::InMemoryCategoryRepo::default()),
        portfolio_read: portfolio.clone(),
        portfolio_write: portfolio,
        page_read: pages.clone(),
        page_write: pages,
        social_links: Arc::new(repos::InMemoryLinksRepo::default()),
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        id_token_verifier,
        file_store: Arc::new(LocalFileStore::new(storage_dir.path(), clock.clone())),
        clock,
    }));

    services
        .user_commands
        .ensure_admin(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("seed admin");

    let router = build_router(HttpState { services }, &[], 10 * 1024 * 1024);
    TestApp {
        router,
        _storage_dir: storage_dir,
    }
}

/// Fire a JSON request at the router and return status plus parsed body.
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Log in as the seeded admin and return a bearer token.
pub async fn login(router: &Router) -> String {
    let (status, body) = send_json(
        router,
        "POST",
        "/api/auth/login",
        None,
        Some(serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"]["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}
