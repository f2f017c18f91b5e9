// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(super::routes::health),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::auth::ChangePasswordRequest,
            crate::presentation::http::controllers::auth::GoogleLoginRequest,
            crate::presentation::http::controllers::blog::CreateBlogPostRequest,
            crate::presentation::http::controllers::blog::UpdateBlogPostRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::pages::CreatePageRequest,
            crate::presentation::http::controllers::pages::UpdatePageRequest,
            crate::presentation::http::controllers::portfolio::CreatePortfolioItemRequest,
            crate::presentation::http::controllers::portfolio::UpdatePortfolioItemRequest,
            crate::presentation::http::controllers::links::UpdateSocialLinksRequest,
            crate::presentation::http::controllers::storage::UploadResponse,
            crate::application::dto::UserDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::BlogPostDto,
            crate::application::dto::BlogCategoryDto,
            crate::application::dto::PortfolioItemDto,
            crate::application::dto::PageDto,
            crate::application::dto::SocialLinksDto,
            crate::application::dto::StoredFileDto
        )
    ),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Blog", description = "Blog post and category management"),
        (name = "Portfolio", description = "Portfolio item management"),
        (name = "Pages", description = "Site page management"),
        (name = "Storage", description = "Uploaded asset management"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Atelier CMS API",
        description = "Content-management backend for a designer portfolio site."
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
