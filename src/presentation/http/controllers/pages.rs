// src/presentation/http/controllers/pages.rs
use super::{blog::ContentListParams, patch};
use crate::application::{
    commands::pages::{CreatePageCommand, UpdatePageCommand},
    dto::PageDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_description: Option<Option<String>>,
}

pub async fn list_pages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<PageDto>>> {
    state
        .services
        .page_queries
        .list_pages(params.published_only())
        .await
        .into_http()
        .map(Json)
}

/// The wildcard joins nested segments back into a single slug, so
/// `/api/pages/legal/privacy-policy` resolves the `legal/privacy-policy` key.
pub async fn get_page(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PageDto>> {
    state
        .services
        .page_queries
        .get_page(&slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_page(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<CreatePageRequest>,
) -> HttpResult<(StatusCode, Json<serde_json::Value>)> {
    let command = CreatePageCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let created = state
        .services
        .page_commands
        .create_page(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "slug": created.slug, "message": "page created" })),
    ))
}

pub async fn update_page(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePageRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = UpdatePageCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let updated = state
        .services
        .page_commands
        .update_page(&slug, command)
        .await
        .into_http()?;

    Ok(Json(json!({ "slug": updated.slug, "message": "page updated" })))
}

pub async fn delete_page(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .page_commands
        .delete_page(&slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "page deleted" })))
}
