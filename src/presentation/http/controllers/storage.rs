// src/presentation/http/controllers/storage.rs
use crate::application::{
    commands::storage::UploadFileCommand, dto::StoredFileDto, error::ApplicationError,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Query},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListFilesParams {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileParams {
    #[serde(default)]
    pub full_path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub files: Vec<StoredFileDto>,
}

fn bad_multipart(err: impl ToString) -> HttpError {
    HttpError::from_error(ApplicationError::Validation(err.to_string()))
}

/// Multipart upload: repeated `files` parts plus an optional `folder` field.
pub async fn upload(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<Json<UploadResponse>> {
    let mut folder = String::new();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("folder") => {
                folder = field.text().await.map_err(bad_multipart)?;
            }
            Some("files") => {
                let file_name = field
                    .file_name()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                files.push(UploadFileCommand {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            _ => {}
        }
    }

    let stored = state
        .services
        .storage
        .upload(&folder, files)
        .await
        .into_http()?;

    Ok(Json(UploadResponse { files: stored }))
}

pub async fn list_files(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<ListFilesParams>,
) -> HttpResult<Json<Vec<StoredFileDto>>> {
    state
        .services
        .storage
        .list(params.folder.as_deref().unwrap_or(""), params.max_results)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_file(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<DeleteFileParams>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .storage
        .delete(params.full_path.as_deref().unwrap_or(""))
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "file deleted" })))
}
