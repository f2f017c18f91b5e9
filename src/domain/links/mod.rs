// src/domain/links/mod.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Singleton document holding the site's social profile URLs.
#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

/// Merge-style patch: only fields present in the payload are written.
#[derive(Debug, Clone, Default)]
pub struct SocialLinksUpdate {
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

#[async_trait]
pub trait SocialLinksRepository: Send + Sync {
    async fn get(&self) -> DomainResult<Option<SocialLinks>>;
    async fn upsert(&self, update: SocialLinksUpdate) -> DomainResult<SocialLinks>;
}
