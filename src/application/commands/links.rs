// src/application/commands/links.rs
use std::sync::Arc;

use crate::{
    application::{dto::SocialLinksDto, error::ApplicationResult},
    domain::links::{SocialLinksRepository, SocialLinksUpdate},
};

pub struct UpdateSocialLinksCommand {
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

pub struct LinksCommandService {
    repo: Arc<dyn SocialLinksRepository>,
}

impl LinksCommandService {
    pub fn new(repo: Arc<dyn SocialLinksRepository>) -> Self {
        Self { repo }
    }

    /// Merge-update: fields absent from the payload keep their stored value.
    pub async fn update_links(
        &self,
        command: UpdateSocialLinksCommand,
    ) -> ApplicationResult<SocialLinksDto> {
        let updated = self
            .repo
            .upsert(SocialLinksUpdate {
                instagram: command.instagram,
                linkedin: command.linkedin,
            })
            .await?;
        Ok(updated.into())
    }
}
