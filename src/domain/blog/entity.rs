// src/domain/blog/entity.rs
use crate::domain::content::{Body, PublishTransition, Slug, Title};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct BlogPost {
    pub slug: Slug,
    pub title: Title,
    pub body: Body,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub featured_image: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

/// Field-level patch for an update. `Option<Option<_>>` fields distinguish
/// "absent from payload" from "explicitly set to null".
#[derive(Debug, Clone, Default)]
pub struct BlogPostChanges {
    pub title: Option<Title>,
    pub body: Option<Body>,
    pub publish: Option<PublishTransition>,
    pub featured_image: Option<Option<String>>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Fold a patch into the record under the given primary key. Used both
    /// by the in-place update path (same slug) and by slug renames, where
    /// the merged record becomes a fresh insert.
    pub fn apply_changes(mut self, slug: Slug, changes: BlogPostChanges) -> Self {
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
        if let Some(categories) = changes.categories {
            self.categories = categories;
        }
        if let Some(tags) = changes.tags {
            self.tags = tags;
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

    fn sample_post() -> BlogPost {
        BlogPost {
            slug: Slug::parse("first-post").unwrap(),
            title: Title::new("First post").unwrap(),
            body: Body::new("hello"),
            published: false,
            published_at: None,
            updated_at: Utc::now(),
            featured_image: Some("cover.png".into()),
            categories: vec!["news".into()],
            tags: vec![],
            seo_title: None,
            seo_description: None,
        }
    }

    #[test]
    fn apply_changes_merges_only_present_fields() {
        let post = sample_post();
        let now = Utc::now();
        let changes = BlogPostChanges {
            body: Some(Body::new("updated body")),
            featured_image: Some(None),
            updated_at: now,
            ..Default::default()
        };
        let merged = post.clone().apply_changes(post.slug.clone(), changes);
        assert_eq!(merged.body.as_str(), "updated body");
        assert_eq!(merged.title.as_str(), "First post");
        assert!(merged.featured_image.is_none());
        assert_eq!(merged.categories, vec!["news".to_string()]);
        assert_eq!(merged.updated_at, now);
    }

    #[test]
    fn apply_changes_moves_record_to_new_slug() {
        let post = sample_post();
        let renamed = post.clone().apply_changes(
            Slug::parse("renamed-post").unwrap(),
            BlogPostChanges::default(),
        );
        assert_eq!(renamed.slug.as_str(), "renamed-post");
        assert_eq!(renamed.title.as_str(), post.title.as_str());
    }
}
