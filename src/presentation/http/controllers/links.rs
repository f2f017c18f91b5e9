// src/presentation/http/controllers/links.rs
use crate::application::{commands::links::UpdateSocialLinksCommand, dto::SocialLinksDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSocialLinksRequest {
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Public read; returns an empty document until links are configured.
pub async fn get_links(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<SocialLinksDto>> {
    state
        .services
        .links_queries
        .get_links()
        .await
        .into_http()
        .map(Json)
}

pub async fn update_links(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Json(payload): Json<UpdateSocialLinksRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .links_commands
        .update_links(UpdateSocialLinksCommand {
            instagram: payload.instagram,
            linkedin: payload.linkedin,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "social links updated" })))
}
