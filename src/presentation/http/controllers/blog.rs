// src/presentation/http/controllers/blog.rs
use super::patch;
use crate::application::{
    commands::blog::{CreateBlogPostCommand, UpdateBlogPostCommand},
    dto::BlogPostDto,
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

#[derive(Debug, Deserialize)]
pub struct ContentListParams {
    #[serde(default)]
    pub published: Option<bool>,
}

impl ContentListParams {
    /// `?published=true` narrows to published records; anything else keeps
    /// the full list, drafts included.
    pub fn published_only(&self) -> bool {
        matches!(self.published, Some(true))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
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
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "patch::double_option")]
    #[schema(value_type = Option<String>)]
    pub seo_description: Option<Option<String>>,
}

pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<Vec<BlogPostDto>>> {
    state
        .services
        .blog_queries
        .list_posts(params.published_only())
        .await
        .into_http()
        .map(Json)
}

pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlogPostDto>> {
    state
        .services
        .blog_queries
        .get_post(&slug)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<CreateBlogPostRequest>,
) -> HttpResult<(StatusCode, Json<serde_json::Value>)> {
    let command = CreateBlogPostCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        featured_image: payload.featured_image,
        categories: payload.categories,
        tags: payload.tags,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let created = state
        .services
        .blog_commands
        .create_post(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "slug": created.slug, "message": "blog post created" })),
    ))
}

pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = UpdateBlogPostCommand {
        slug: payload.slug,
        title: payload.title,
        body: payload.body,
        published: payload.published,
        featured_image: payload.featured_image,
        categories: payload.categories,
        tags: payload.tags,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
    };

    let updated = state
        .services
        .blog_commands
        .update_post(&slug, command)
        .await
        .into_http()?;

    Ok(Json(
        json!({ "slug": updated.slug, "message": "blog post updated" }),
    ))
}

pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .blog_commands
        .delete_post(&slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "blog post deleted" })))
}
