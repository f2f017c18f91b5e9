// src/application/queries/links.rs
use std::sync::Arc;

use crate::{
    application::{dto::SocialLinksDto, error::ApplicationResult},
    domain::links::SocialLinksRepository,
};

pub struct LinksQueryService {
    repo: Arc<dyn SocialLinksRepository>,
}

impl LinksQueryService {
    pub fn new(repo: Arc<dyn SocialLinksRepository>) -> Self {
        Self { repo }
    }

    /// The singleton may not exist yet; callers get an empty document then.
    pub async fn get_links(&self) -> ApplicationResult<SocialLinksDto> {
        let links = self.repo.get().await?.unwrap_or_default();
        Ok(links.into())
    }
}
