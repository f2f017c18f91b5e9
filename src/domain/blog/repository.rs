// src/domain/blog/repository.rs
use crate::domain::blog::entity::{BlogPost, BlogPostChanges};
use crate::domain::content::Slug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BlogPostWriteRepository: Send + Sync {
    async fn insert(&self, post: BlogPost) -> DomainResult<BlogPost>;
    /// Apply a patch in place. The slug is never changed here; renames go
    /// through insert + delete so the old and new rows are never conflated.
    async fn update(&self, slug: &Slug, changes: BlogPostChanges) -> DomainResult<BlogPost>;
    async fn delete(&self, slug: &Slug) -> DomainResult<()>;
}

#[async_trait]
pub trait BlogPostReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>>;
    /// Newest first by publish timestamp; drafts sort last.
    async fn list(&self, published_only: bool) -> DomainResult<Vec<BlogPost>>;
}
