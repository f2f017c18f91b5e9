// src/application/dto/portfolio.rs
use crate::domain::portfolio::{
    CaseResults, Illustration, Objective, PortfolioImages, PortfolioItem, Reflections,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemDto {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub featured: bool,
    #[serde(rename = "order")]
    pub display_order: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub images: Option<PortfolioImages>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub objectives: Option<Vec<Objective>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub results: Option<CaseResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub reflections: Option<Reflections>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub illustration: Option<Illustration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl From<PortfolioItem> for PortfolioItemDto {
    fn from(item: PortfolioItem) -> Self {
        Self {
            slug: item.slug.into(),
            title: item.title.into(),
            body: item.body.into(),
            published: item.published,
            published_at: item.published_at,
            updated_at: item.updated_at,
            featured_image: item.featured_image,
            kind: item.kind,
            category: item.category,
            status: item.status,
            featured: item.featured,
            display_order: item.display_order,
            client: item.client,
            year: item.year,
            tags: item.tags,
            link: item.link,
            images: item.images,
            objectives: item.objectives,
            results: item.results,
            reflections: item.reflections,
            illustration: item.illustration,
            seo_title: item.seo_title,
            seo_description: item.seo_description,
        }
    }
}
