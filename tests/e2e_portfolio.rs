// tests/e2e_portfolio.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use support::{login, make_test_app, send_json};

#[tokio::test]
async fn structured_blocks_survive_a_round_trip() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    let (status, body) = send_json(
        &app.router,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(json!({
            "slug": "brand-refresh",
            "title": "Brand refresh",
            "body": "Case study.",
            "published": true,
            "type": "branding",
            "client": "Acme",
            "year": "2024",
            "order": 2,
            "images": { "hero": "hero.png", "gallery": ["a.png", "b.png"] },
            "objectives": [
                { "title": "Refresh", "description": "New identity", "color": "purple" }
            ],
            "results": { "paragraphs": ["Great outcome."], "figmaLink": "https://figma.com/x" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");

    let (status, body) =
        send_json(&app.router, "GET", "/api/portfolio/brand-refresh", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "branding");
    assert_eq!(body["order"], 2);
    assert_eq!(body["images"]["hero"], "hero.png");
    assert_eq!(body["images"]["gallery"][1], "b.png");
    assert_eq!(body["objectives"][0]["color"], "purple");
    assert_eq!(body["results"]["figmaLink"], "https://figma.com/x");
}

#[tokio::test]
async fn partial_update_preserves_untouched_blocks() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    send_json(
        &app.router,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(json!({
            "slug": "poster-series",
            "title": "Poster series",
            "body": "b",
            "images": { "hero": "poster.png" },
            "reflections": { "content": ["Learned a lot."] }
        })),
    )
    .await;

    send_json(
        &app.router,
        "PUT",
        "/api/portfolio/poster-series",
        Some(&token),
        Some(json!({ "order": 9, "client": "Studio X" })),
    )
    .await;

    let (_, body) =
        send_json(&app.router, "GET", "/api/portfolio/poster-series", None, None).await;
    assert_eq!(body["order"], 9);
    assert_eq!(body["client"], "Studio X");
    assert_eq!(body["images"]["hero"], "poster.png");
    assert_eq!(body["reflections"]["content"][0], "Learned a lot.");
}

#[tokio::test]
async fn blocks_can_be_cleared_with_null() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    send_json(
        &app.router,
        "POST",
        "/api/portfolio",
        Some(&token),
        Some(json!({
            "slug": "illustrations",
            "title": "Illustrations",
            "body": "b",
            "illustration": { "subtitle": "Ink on paper" }
        })),
    )
    .await;

    send_json(
        &app.router,
        "PUT",
        "/api/portfolio/illustrations",
        Some(&token),
        Some(json!({ "illustration": null })),
    )
    .await;

    let (_, body) =
        send_json(&app.router, "GET", "/api/portfolio/illustrations", None, None).await;
    assert!(body.get("illustration").is_none() || body["illustration"].is_null());
}

#[tokio::test]
async fn list_orders_by_display_order() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    for (slug, order) in [("third", 3), ("first", 1), ("second", 2)] {
        send_json(
            &app.router,
            "POST",
            "/api/portfolio",
            Some(&token),
            Some(json!({
                "slug": slug,
                "title": slug,
                "body": "b",
                "published": true,
                "order": order
            })),
        )
        .await;
    }

    let (_, body) = send_json(&app.router, "GET", "/api/portfolio", None, None).await;
    let slugs: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn portfolio_rename_honors_conflicts() {
    let app = make_test_app().await;
    let token = login(&app.router).await;

    for slug in ["existing-work", "wip-work"] {
        send_json(
            &app.router,
            "POST",
            "/api/portfolio",
            Some(&token),
            Some(json!({ "slug": slug, "title": slug, "body": "b" })),
        )
        .await;
    }

    let (status, _) = send_json(
        &app.router,
        "PUT",
        "/api/portfolio/wip-work",
        Some(&token),
        Some(json!({ "slug": "existing-work" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send_json(
        &app.router,
        "PUT",
        "/api/portfolio/wip-work",
        Some(&token),
        Some(json!({ "slug": "finished-work" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) =
        send_json(&app.router, "GET", "/api/portfolio/finished-work", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
