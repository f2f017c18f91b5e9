// src/application/dto/links.rs
use crate::domain::links::SocialLinks;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SocialLinksDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl From<SocialLinks> for SocialLinksDto {
    fn from(links: SocialLinks) -> Self {
        Self {
            instagram: links.instagram,
            linkedin: links.linkedin,
        }
    }
}
