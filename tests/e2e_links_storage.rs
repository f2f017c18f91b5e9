// tests/e2e_links_storage.rs
use axum::{
    body::{self, Body},
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{login, make_test_app, send_json};

const BOUNDARY: &str = "test-boundary-4f9a2c";

fn multipart_body(folder: &str, file_name: &str, contents: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"folder\"\r\n\r\n{folder}\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; \
             filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}

#[tokio::test]
async fn social_links_start_empty_and_merge_updates() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (status, body) = send_json(&app.router, "GET", "/api/links/socials", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = send_json(
        &app.router,
        "PUT",
        "/api/links/socials-update",
        Some(&token),
        Some(json!({ "instagram": "https://instagram.com/studio" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // A second update touching only linkedin keeps instagram.
    send_json(
        &app.router,
        "PUT",
        "/api/links/socials-update",
        Some(&token),
        Some(json!({ "linkedin": "https://linkedin.com/in/studio" })),
    )
    .await;

    let (_, body) = send_json(&app.router, "GET", "/api/links/socials", None, None).await;
    assert_eq!(body["instagram"], "https://instagram.com/studio");
    assert_eq!(body["linkedin"], "https://linkedin.com/in/studio");
}

#[tokio::test]
async fn social_links_update_requires_auth() {
    let app = make_test_app().await;
    let (status, _) = send_json(
        &app.router,
        "PUT",
        "/api/links/socials-update",
        None,
        Some(json!({ "instagram": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_list_serve_and_delete_a_file() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (content_type, payload) = multipart_body("covers", "hero.png", b"not-really-a-png");
    let request = Request::builder()
        .method("POST")
        .uri("/api/storage/upload")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(payload))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let uploaded: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let file = &uploaded["files"][0];
    assert_eq!(file["name"], "hero.png");
    let full_path = file["fullPath"].as_str().unwrap().to_string();
    assert!(full_path.starts_with("covers/"));

    // Listing shows it.
    let (status, listed) = send_json(
        &app.router,
        "GET",
        "/api/storage/list?folder=covers",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // The public image proxy streams it back with cache headers.
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/image/{full_path}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("image/png")
    );
    assert!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("max-age"))
    );
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    assert_eq!(&bytes[..], b"not-really-a-png");

    // Delete, then the proxy 404s; a second delete stays 200.
    let (status, _) = send_json(
        &app.router,
        "DELETE",
        &format!("/api/storage/delete?fullPath=covers%2F{}", &full_path["covers/".len()..]),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send_json(
        &app.router,
        "GET",
        &format!("/api/image/{full_path}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn storage_endpoints_require_auth() {
    let app = make_test_app().await;

    let (status, _) = send_json(&app.router, "GET", "/api/storage/list", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(
        &app.router,
        "DELETE",
        "/api/storage/delete?fullPath=x.png",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_without_files_is_rejected() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let body_str = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"folder\"\r\n\r\ncovers\r\n--{BOUNDARY}--\r\n"
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/storage/upload")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body_str))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_image_is_404_and_traversal_is_400() {
    let app = make_test_app().await;

    let (status, _) = send_json(&app.router, "GET", "/api/image/ghost.png", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app.router,
        "GET",
        "/api/image/..%2Fsecrets.txt",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
