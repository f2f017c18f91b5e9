// src/application/ports/storage.rs
use crate::application::{
    ApplicationResult,
    dto::{FileDownload, StoredFileDto},
};
use async_trait::async_trait;
use bytes::Bytes;

/// Backing store for uploaded assets. The default implementation is a local
/// directory served back through the image proxy endpoint.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn save(
        &self,
        folder: &str,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> ApplicationResult<StoredFileDto>;

    async fn list(&self, folder: &str, max_results: usize) -> ApplicationResult<Vec<StoredFileDto>>;

    /// Removing a path that no longer exists is not an error.
    async fn delete(&self, full_path: &str) -> ApplicationResult<()>;

    async fn get(&self, full_path: &str) -> ApplicationResult<Option<FileDownload>>;
}
