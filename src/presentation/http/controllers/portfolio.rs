// src/presentation/http/controllers/portfolio.rs
use super::{blog::ContentListParams, patch};
use crate::application::{
    commands::portfolio::{CreatePortfolioItemCommand, UpdatePortfolioItemCommand},
    dto::PortfolioItemDto,
};
use crate::domain::portfolio::{
    CaseResults, Illustration, Objective, PortfolioImages, Reflections,
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
pub struct CreatePortfolioItemRequest {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "order")]
    pub display_order: i32,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub images: Option<PortfolioImages>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub objectives: Option<Vec<Objective>>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub results: Option<CaseResults>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub reflections: Option<Reflections>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub illustration: Option<Illustration>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolioItemRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    #[serde(default, rename = "type", deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,
    pub featured: Option<bool>,
    #[serde(rename = "order")]
    pub display_order: Option<i32>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub client: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub year: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Object)]
    pub images: Option<Option<PortfolioImages>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Object)]
    pub objectives: Option<Option<Vec<Objective>>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Object)]
    pub results: Option<Option<CaseResults>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Object)]
    pub reflections: Option<Option<Reflections>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Object)]
    pub illustration: Option<Option<Illustration>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_description: Option<Option<String>>,
}

pub async fn list_items(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<PortfolioItemDto>>> {
    state
        .services
        .portfolio_queries
        .list_items(params.published_only())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PortfolioItemDto>> {
    state
        .services
        .portfolio_queries
        .get_item(&slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<CreatePortfolioItemRequest>,
) -> HttpResult<(StatusCode, Json<serde_json::Value>)> {
    let command = CreatePortfolioItemCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        featured_image: payload.featured_image,
        kind: payload.kind,
        category: payload.category,
        status: payload.status,
        featured: payload.featured,
        display_order: payload.display_order,
        client: payload.client,
        year: payload.year,
        tags: payload.tags,
        link: payload.link,
        images: payload.images,
        objectives: payload.objectives,
        results: payload.results,
        reflections: payload.reflections,
        illustration: payload.illustration,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let created = state
        .services
        .portfolio_commands
        .create_item(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "slug": created.slug, "message": "portfolio item created" })),
    ))
}

pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdatePortfolioItemRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = UpdatePortfolioItemCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        featured_image: payload.featured_image,
        kind: payload.kind,
        category: payload.category,
        status: payload.status,
        featured: payload.featured,
        display_order: payload.display_order,
        client: payload.client,
        year: payload.year,
        tags: payload.tags,
        link: payload.link,
        images: payload.images,
        objectives: payload.objectives,
        results: payload.results,
        reflections: payload.reflections,
        illustration: payload.illustration,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let updated = state
        .services
        .portfolio_commands
        .update_item(&slug, command)
        .await
        .into_http()?;

    Ok(Json(
        json!({ "slug": updated.slug, "message": "portfolio item updated" }),
    ))
}

pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .portfolio_commands
        .delete_item(&slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "portfolio item deleted" })))
}
