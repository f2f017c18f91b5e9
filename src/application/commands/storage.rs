// src/application/commands/storage.rs
use std::sync::Arc;

use bytes::Bytes;

use crate::application::{
    dto::{FileDownload, StoredFileDto},
    error::{ApplicationError, ApplicationResult},
    ports::storage::FileStore,
};

const DEFAULT_LIST_LIMIT: usize = 1000;

pub struct UploadFileCommand {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

pub struct StorageService {
    store: Arc<dyn FileStore>,
}

impl StorageService {
    pub fn new(store: Arc<dyn FileStore>) -> Self {
        Self { store }
    }

    pub async fn upload(
        &self,
        folder: &str,
        files: Vec<UploadFileCommand>,
    ) -> ApplicationResult<Vec<StoredFileDto>> {
        if files.is_empty() {
            return Err(ApplicationError::validation("no files provided"));
        }

        let mut stored = Vec::with_capacity(files.len());
        for file in files {
            if file.file_name.trim().is_empty() {
                return Err(ApplicationError::validation("file name cannot be empty"));
            }
            let saved = self
                .store
                .save(
                    folder,
                    &file.file_name,
                    file.content_type.as_deref(),
                    file.bytes,
                )
                .await?;
            stored.push(saved);
        }
        Ok(stored)
    }

    pub async fn list(
        &self,
        folder: &str,
        max_results: Option<usize>,
    ) -> ApplicationResult<Vec<StoredFileDto>> {
        let limit = max_results
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_LIST_LIMIT);
        self.store.list(folder, limit).await
    }

    pub async fn delete(&self, full_path: &str) -> ApplicationResult<()> {
        if full_path.trim().is_empty() {
            return Err(ApplicationError::validation("file path is required"));
        }
        self.store.delete(full_path).await
    }

    pub async fn download(&self, full_path: &str) -> ApplicationResult<FileDownload> {
        self.store
            .get(full_path)
            .await?
            .ok_or_else(|| ApplicationError::not_found("file not found"))
    }
}
