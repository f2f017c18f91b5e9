// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApplicationError::Domain(domain_err) => {
                use crate::domain::errors::DomainError;
                match domain_err {
                    DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
                    DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
                    DomainError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
                    DomainError::Persistence(msg) => {
                        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
                    }
                }
            }
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}

/// Uniform error body: every failure maps to `{"error": "..."}`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
