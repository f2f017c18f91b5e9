// src/domain/page/repository.rs
use crate::domain::content::Slug;
use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{Page, PageChanges};
use async_trait::async_trait;

#[async_trait]
pub trait PageWriteRepository: Send + Sync {
    async fn insert(&self, page: Page) -> DomainResult<Page>;
    async fn update(&self, slug: &Slug, changes: PageChanges) -> DomainResult<Page>;
    async fn delete(&self, slug: &Slug) -> DomainResult<()>;
}

#[async_trait]
pub trait PageReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    async fn list(&self, published_only: bool) -> DomainResult<Vec<Page>>;
}
