// src/application/dto/storage.rs
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoredFileDto {
    pub name: String,
    pub full_path: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

/// Raw file contents handed back to the image proxy.
#[derive(Debug, Clone)]
pub struct FileDownload {
    pub bytes: Bytes,
    pub content_type: String,
    pub size: u64,
}
