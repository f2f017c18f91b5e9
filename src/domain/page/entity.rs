// src/domain/page/entity.rs
use crate::domain::content::{Body, PublishTransition, Slug, Title};
use chrono::{DateTime, Utc};

/// A free-form site page. Unlike posts and portfolio items, page slugs may
/// nest (`legal/privacy-policy`).
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: Slug,
    pub title: Title,
    pub body: Body,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PageChanges {
    pub title: Option<Title>,
    pub body: Option<Body>,
    pub publish: Option<PublishTransition>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn apply_changes(mut self, slug: Slug, changes: PageChanges) -> Self {
        self.slug = slug;
        self.updated_at = changes.updated_at;
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(body) = changes.body {
            self.body = body;
        }
        if let Some(publish) = changes.publish {
            self.published = publish.published;
            self.published_at = publish.published_at;
        }
        if let Some(seo_title) = changes.seo_title {
            self.seo_title = seo_title;
        }
        if let Some(seo_description) = changes.seo_description {
            self.seo_description = seo_description;
        }
        self
    }
}
