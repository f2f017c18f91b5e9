// src/application/queries/portfolio.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PortfolioItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{content::Slug, portfolio::PortfolioReadRepository},
};

pub struct PortfolioQueryService {
    read_repo: Arc<dyn PortfolioReadRepository>,
}

impl PortfolioQueryService {
    pub fn new(read_repo: Arc<dyn PortfolioReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_items(&self, published_only: bool) -> ApplicationResult<Vec<PortfolioItemDto>> {
        let items = self.read_repo.list(published_only).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn get_item(&self, slug: &str) -> ApplicationResult<PortfolioItemDto> {
        let slug = Slug::parse(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("portfolio item not found"))
    }
}
