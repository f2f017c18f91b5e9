// src/presentation/http/controllers/image.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};

/// Stored assets are immutable (uploads get a fresh timestamped name), so a
/// long client cache is safe.
const CACHE_HEADER: &str = "public, max-age=604800, immutable";

pub async fn serve_image(
    Extension(state): Extension<HttpState>,
    Path(path): Path<String>,
) -> HttpResult<Response> {
    let file = state.services.storage.download(&path).await.into_http()?;

    let headers = [
        (header::CONTENT_TYPE, file.content_type),
        (header::CACHE_CONTROL, CACHE_HEADER.to_string()),
    ];
    Ok((headers, file.bytes).into_response())
}
