// src/application/queries/pages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::Slug, page::PageReadRepository},
};

pub struct PageQueryService {
    read_repo: Arc<dyn PageReadRepository>,
}

impl PageQueryService {
    pub fn new(read_repo: Arc<dyn PageReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_pages(&self, published_only: bool) -> ApplicationResult<Vec<PageDto>> {
        let pages = self.read_repo.list(published_only).await?;
        Ok(pages.into_iter().map(Into::into).collect())
    }

    pub async fn get_page(&self, slug: &str) -> ApplicationResult<PageDto> {
        let slug = Slug::parse_path(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }
}
