// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, blog, categories, image, links, pages, portfolio, storage},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String], max_upload_bytes: usize) -> Router {
    // With no configured origins the request's Origin is mirrored back,
    // which is what the admin panel expects during local development.
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::current_user))
        .route("/api/auth/change-password", post(auth::change_password))
        .route("/api/auth/google", post(auth::google_login))
        .route("/api/blog", get(blog::list_posts).post(blog::create_post))
        .route(
            "/api/blog/{slug}",
            get(blog::get_post)
                .put(blog::update_post)
                .delete(blog::delete_post),
        )
        .route(
            "/api/blog-categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/api/blog-categories/{slug}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route(
            "/api/portfolio",
            get(portfolio::list_items).post(portfolio::create_item),
        )
        .route(
            "/api/portfolio/{slug}",
            get(portfolio::get_item)
                .put(portfolio::update_item)
                .delete(portfolio::delete_item),
        )
        .route("/api/pages", get(pages::list_pages).post(pages::create_page))
        .route(
            "/api/pages/{*slug}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/api/links/socials", get(links::get_links))
        .route("/api/links/socials-update", put(links::update_links))
        .route("/api/storage/upload", post(storage::upload))
        .route("/api/storage/list", get(storage::list_files))
        .route("/api/storage/delete", delete(storage::delete_file))
        .route("/api/image/{*path}", get(image::serve_image))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
