// src/application/dto/pages.rs
use crate::domain::page::Page;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            slug: page.slug.into(),
            title: page.title.into(),
            body: page.body.into(),
            published: page.published,
            published_at: page.published_at,
            updated_at: page.updated_at,
            seo_title: page.seo_title,
            seo_description: page.seo_description,
        }
    }
}
