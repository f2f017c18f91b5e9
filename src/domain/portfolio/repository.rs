// src/domain/portfolio/repository.rs
use crate::domain::content::Slug;
use crate::domain::errors::DomainResult;
use crate::domain::portfolio::entity::{PortfolioItem, PortfolioItemChanges};
use async_trait::async_trait;

#[async_trait]
pub trait PortfolioWriteRepository: Send + Sync {
    async fn insert(&self, item: PortfolioItem) -> DomainResult<PortfolioItem>;
    async fn update(&self, slug: &Slug, changes: PortfolioItemChanges)
    -> DomainResult<PortfolioItem>;
    async fn delete(&self, slug: &Slug) -> DomainResult<()>;
}

#[async_trait]
pub trait PortfolioReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>>;
    /// Ordered by the manual display order, then most recently updated.
    async fn list(&self, published_only: bool) -> DomainResult<Vec<PortfolioItem>>;
}
