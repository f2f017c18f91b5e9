// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{ChangePasswordCommand, GoogleLoginCommand, LoginCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserDto,
    pub token: AuthTokenDto,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    #[serde(default)]
    pub id_token: String,
}

pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginCommand {
            email: payload.email,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        user: result.user,
        token: result.token,
    }))
}

pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<serde_json::Value>> {
    let user = state
        .services
        .user_queries
        .current_user(&user)
        .await
        .into_http()?;

    Ok(Json(json!({ "user": user })))
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let result = state
        .services
        .user_commands
        .change_password(
            &user,
            ChangePasswordCommand {
                current_password: payload.current_password,
                new_password: payload.new_password,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({
        "message": "password updated",
        "user": result.user,
        "token": result.token,
    })))
}

/// Sessions are stateless JWTs; logout exists so clients have a uniform
/// endpoint to call while discarding their token.
pub async fn logout() -> Json<serde_json::Value> {
    Json(json!({ "message": "logged out" }))
}

pub async fn google_login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<GoogleLoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login_with_google(GoogleLoginCommand {
            id_token: payload.id_token,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        user: result.user,
        token: result.token,
    }))
}
