// src/application/queries/blog.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{blog::BlogPostReadRepository, content::Slug},
};

pub struct BlogQueryService {
    read_repo: Arc<dyn BlogPostReadRepository>,
}

impl BlogQueryService {
    pub fn new(read_repo: Arc<dyn BlogPostReadRepository>) -> Self {
        Self { read_repo }
    }

    pub async fn list_posts(&self, published_only: bool) -> ApplicationResult<Vec<BlogPostDto>> {
        let posts = self.read_repo.list(published_only).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    pub async fn get_post(&self, slug: &str) -> ApplicationResult<BlogPostDto> {
        let slug = Slug::parse(slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))
    }
}
