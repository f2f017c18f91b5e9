// src/application/queries/categories.rs
use std::sync::Arc;

use crate::{
    application::{dto::BlogCategoryDto, error::ApplicationResult},
    domain::blog::BlogCategoryRepository,
};

pub struct CategoryQueryService {
    repo: Arc<dyn BlogCategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn BlogCategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<BlogCategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
