// src/infrastructure/storage/local.rs
use crate::application::{
    dto::{FileDownload, StoredFileDto},
    error::{ApplicationError, ApplicationResult},
    ports::{storage::FileStore, time::Clock},
};
use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::{
    io,
    path::{Component, Path, PathBuf},
    sync::Arc,
};
use tokio::fs;

/// Filesystem-backed store. Uploads land under `root`, optionally inside a
/// folder, with a millisecond-timestamp prefix to keep names unique, and are
/// served back through the `/api/image/{path}` proxy.
pub struct LocalFileStore {
    root: PathBuf,
    clock: Arc<dyn Clock>,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            root: root.into(),
            clock,
        }
    }

    fn resolve(&self, relative: &str) -> ApplicationResult<PathBuf> {
        Ok(self.root.join(sanitize(relative)?))
    }
}

/// Reject anything that could escape the storage root.
fn sanitize(relative: &str) -> ApplicationResult<PathBuf> {
    if relative.is_empty() {
        return Err(ApplicationError::validation("file path is required"));
    }
    let path = Path::new(relative);
    let safe = path
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !safe || relative.contains('\\') {
        return Err(ApplicationError::validation(format!(
            "invalid file path '{relative}'"
        )));
    }
    Ok(path.to_path_buf())
}

fn content_type_for(path: &str) -> &'static str {
    let ext = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

fn map_io(err: io::Error) -> ApplicationError {
    ApplicationError::infrastructure(err.to_string())
}

fn proxy_url(full_path: &str) -> String {
    format!("/api/image/{full_path}")
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(
        &self,
        folder: &str,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Bytes,
    ) -> ApplicationResult<StoredFileDto> {
        let stored_name = format!(
            "{}-{}",
            self.clock.now().timestamp_millis(),
            sanitize(file_name)?.display()
        );
        let full_path = if folder.is_empty() {
            stored_name.clone()
        } else {
            sanitize(folder)?;
            format!("{folder}/{stored_name}")
        };

        let target = self.resolve(&full_path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).await.map_err(map_io)?;
        }
        let size = bytes.len() as u64;
        fs::write(&target, &bytes).await.map_err(map_io)?;

        Ok(StoredFileDto {
            name: file_name.to_string(),
            url: proxy_url(&full_path),
            full_path,
            size,
            content_type: content_type
                .map(ToString::to_string)
                .unwrap_or_else(|| content_type_for(file_name).to_string()),
            updated: Some(self.clock.now()),
            folder: (!folder.is_empty()).then(|| folder.to_string()),
        })
    }

    async fn list(&self, folder: &str, max_results: usize) -> ApplicationResult<Vec<StoredFileDto>> {
        let dir = if folder.is_empty() {
            self.root.clone()
        } else {
            self.resolve(folder)?
        };

        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(map_io(err)),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_io)? {
            let metadata = entry.metadata().await.map_err(map_io)?;
            if !metadata.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let full_path = if folder.is_empty() {
                name.clone()
            } else {
                format!("{folder}/{name}")
            };
            let updated = metadata
                .modified()
                .ok()
                .map(DateTime::<Utc>::from);

            files.push(StoredFileDto {
                content_type: content_type_for(&name).to_string(),
                url: proxy_url(&full_path),
                name,
                full_path,
                size: metadata.len(),
                updated,
                folder: (!folder.is_empty()).then(|| folder.to_string()),
            });
        }

        files.sort_by(|a, b| b.updated.cmp(&a.updated));
        files.truncate(max_results);
        Ok(files)
    }

    async fn delete(&self, full_path: &str) -> ApplicationResult<()> {
        let target = self.resolve(full_path)?;
        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(map_io(err)),
        }
    }

    async fn get(&self, full_path: &str) -> ApplicationResult<Option<FileDownload>> {
        let target = self.resolve(full_path)?;
        match fs::read(&target).await {
            Ok(contents) => Ok(Some(FileDownload {
                size: contents.len() as u64,
                bytes: Bytes::from(contents),
                content_type: content_type_for(full_path).to_string(),
            })),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(map_io(err)),
        }
    }
}
