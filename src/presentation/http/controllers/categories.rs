// src/presentation/http/controllers/categories.rs
use crate::application::{
    commands::categories::{CreateCategoryCommand, UpdateCategoryCommand},
    dto::BlogCategoryDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    pub name: String,
}

pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<BlogCategoryDto>>> {
    state
        .services
        .category_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<serde_json::Value>)> {
    let created = state
        .services
        .category_commands
        .create_category(CreateCategoryCommand {
            slug: payload.slug,
            name: payload.name,
        })
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "slug": created.slug, "message": "category created" })),
    ))
}

pub async fn update_category(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let updated = state
        .services
        .category_commands
        .update_category(&slug, UpdateCategoryCommand { name: payload.name })
        .await
        .into_http()?;

    Ok(Json(
        json!({ "slug": updated.slug, "message": "category updated" }),
    ))
}

pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .category_commands
        .delete_category(&slug)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "category deleted" })))
}
