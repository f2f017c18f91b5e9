// src/application/dto/blog.rs
use crate::domain::blog::{BlogCategory, BlogPost};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDto {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
}

impl From<BlogPost> for BlogPostDto {
    fn from(post: BlogPost) -> Self {
        Self {
            slug: post.slug.into(),
            title: post.title.into(),
            body: post.body.into(),
            published: post.published,
            published_at: post.published_at,
            updated_at: post.updated_at,
            featured_image: post.featured_image,
            categories: post.categories,
            tags: post.tags,
            seo_title: post.seo_title,
            seo_description: post.seo_description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlogCategoryDto {
    pub slug: String,
    pub name: String,
}

impl From<BlogCategory> for BlogCategoryDto {
    fn from(category: BlogCategory) -> Self {
        Self {
            slug: category.slug.into(),
            name: category.name.into(),
        }
    }
}
