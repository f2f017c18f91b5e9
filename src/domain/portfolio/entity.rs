// src/domain/portfolio/entity.rs
use crate::domain::content::{Body, PublishTransition, Slug, Title};
use crate::domain::portfolio::value_objects::{
    CaseResults, Illustration, Objective, PortfolioImages, Reflections,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct PortfolioItem {
    pub slug: Slug,
    pub title: Title,
    pub body: Body,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub featured_image: Option<String>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub client: Option<String>,
    pub year: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub images: Option<PortfolioImages>,
    pub objectives: Option<Vec<Objective>>,
    pub results: Option<CaseResults>,
    pub reflections: Option<Reflections>,
    pub illustration: Option<Illustration>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioItemChanges {
    pub title: Option<Title>,
    pub body: Option<Body>,
    pub publish: Option<PublishTransition>,
    pub featured_image: Option<Option<String>>,
    pub kind: Option<Option<String>>,
    pub category: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub featured: Option<bool>,
    pub display_order: Option<i32>,
    pub client: Option<Option<String>>,
    pub year: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub link: Option<Option<String>>,
    pub images: Option<Option<PortfolioImages>>,
    pub objectives: Option<Option<Vec<Objective>>>,
    pub results: Option<Option<CaseResults>>,
    pub reflections: Option<Option<Reflections>>,
    pub illustration: Option<Option<Illustration>>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioItem {
    pub fn apply_changes(mut self, slug: Slug, changes: PortfolioItemChanges) -> Self {
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
        if let Some(featured_image) = changes.featured_image {
            self.featured_image = featured_image;
        }
        if let Some(kind) = changes.kind {
            self.kind = kind;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(featured) = changes.featured {
            self.featured = featured;
        }
        if let Some(display_order) = changes.display_order {
            self.display_order = display_order;
        }
        if let Some(client) = changes.client {
            self.client = client;
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
        }
        if let Some(link) = changes.link {
            self.link = link;
        }
        if let Some(images) = changes.images {
            self.images = images;
        }
        if let Some(objectives) = changes.objectives {
            self.objectives = objectives;
        }
        if let Some(results) = changes.results {
            self.results = results;
        }
        if let Some(reflections) = changes.reflections {
            self.reflections = reflections;
        }
        if let Some(illustration) = changes.illustration {
            self.illustration = illustration;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> PortfolioItem {
        PortfolioItem {
            slug: Slug::parse("brand-identity").unwrap(),
            title: Title::new("Brand identity").unwrap(),
            body: Body::new("case study"),
            published: true,
            published_at: Some(Utc::now()),
            updated_at: Utc::now(),
            featured_image: None,
            kind: Some("branding".into()),
            category: None,
            status: None,
            featured: false,
            display_order: 3,
            client: Some("Acme".into()),
            year: Some("2024".into()),
            tags: vec!["logo".into()],
            link: None,
            images: Some(PortfolioImages {
                hero: Some("hero.png".into()),
                ..Default::default()
            }),
            objectives: None,
            results: None,
            reflections: None,
            illustration: None,
            seo_title: None,
            seo_description: None,
        }
    }

    #[test]
    fn untouched_structured_blocks_survive_a_patch() {
        let item = sample_item();
        let now = Utc::now();
        let changes = PortfolioItemChanges {
            display_order: Some(1),
            updated_at: now,
            ..Default::default()
        };
        let merged = item.clone().apply_changes(item.slug.clone(), changes);
        assert_eq!(merged.display_order, 1);
        assert_eq!(merged.images, item.images);
        assert_eq!(merged.client.as_deref(), Some("Acme"));
    }

    #[test]
    fn structured_blocks_can_be_cleared() {
        let item = sample_item();
        let changes = PortfolioItemChanges {
            images: Some(None),
            updated_at: Utc::now(),
            ..Default::default()
        };
        let merged = item.clone().apply_changes(item.slug.clone(), changes);
        assert!(merged.images.is_none());
    }
}
