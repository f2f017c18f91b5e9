// tests/e2e_pages.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{login, make_test_app, send_json};

#[tokio::test]
async fn nested_page_slugs_round_trip() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/pages",
        Some(&token),
        Some(json!({
            "slug": "legal/privacy-policy",
            "title": "Privacy policy",
            "body": "The fine print.",
            "published": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");

    let (status, body) = send_json(
        &app.router,
        "GET",
        "/api/pages/legal/privacy-policy",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "legal/privacy-policy");
    assert_eq!(body["title"], "Privacy policy");
}

#[tokio::test]
async fn single_segment_pages_work_too() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    send_json(
        &app.router,
        "POST",
        "/api/pages",
        Some(&token),
        Some(json!({ "slug": "about", "title": "About", "body": "Hi." })),
    )
    .await;

    let (status, _) = send_json(&app.router, "GET", "/api/pages/about", None, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_nested_slugs_are_rejected() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    for bad in ["Legal/privacy", "legal//privacy", "legal/privacy-"] {
        let (status, _) = send_json(
            &app.router,
            "POST",
            "/api/pages",
            Some(&token),
            Some(json!({ "slug": bad, "title": "t", "body": "b" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "slug '{bad}' accepted");
    }
}

#[tokio::test]
async fn renaming_a_nested_page_relocates_it() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    send_json(
        &app.router,
        "POST",
        "/api/pages",
        Some(&token),
        Some(json!({ "slug": "legal/old-terms", "title": "Terms", "body": "v1" })),
    )
    .await;

    let (status, _) = send_json(
        &app.router,
        "PUT",
        "/api/pages/legal/old-terms",
        Some(&token),
        Some(json!({ "slug": "legal/terms-of-service" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        send_json(&app.router, "GET", "/api/pages/legal/old-terms", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send_json(
        &app.router,
        "GET",
        "/api/pages/legal/terms-of-service",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Terms");
}

#[tokio::test]
async fn page_list_respects_published_filter() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    for (slug, published) in [("home", true), ("wip/redesign", false)] {
        send_json(
            &app.router,
            "POST",
            "/api/pages",
            Some(&token),
            Some(json!({ "slug": slug, "title": slug, "body": "b", "published": published })),
        )
        .await;
    }

    let (_, all) = send_json(&app.router, "GET", "/api/pages", None, None).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, live) = send_json(&app.router, "GET", "/api/pages?published=true", None, None).await;
    let live = live.as_array().unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0]["slug"], "home");
}

#[tokio::test]
async fn page_deletion_requires_auth() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    send_json(
        &app.router,
        "POST",
        "/api/pages",
        Some(&token),
        Some(json!({ "slug": "fleeting", "title": "Fleeting", "body": "b" })),
    )
    .await;

    let (status, _) = send_json(&app.router, "DELETE", "/api/pages/fleeting", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(
        &app.router,
        "DELETE",
        "/api/pages/fleeting",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
