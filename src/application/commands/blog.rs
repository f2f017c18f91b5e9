// src/application/commands/blog.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::BlogPostDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        blog::{BlogPost, BlogPostChanges, BlogPostReadRepository, BlogPostWriteRepository},
        content::{Body, PublishTransition, Slug, Title},
    },
};

pub struct CreateBlogPostCommand {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub featured_image: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Default)]
pub struct UpdateBlogPostCommand {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    pub featured_image: Option<Option<String>>,
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
}

pub struct BlogCommandService {
    write_repo: Arc<dyn BlogPostWriteRepository>,
    read_repo: Arc<dyn BlogPostReadRepository>,
    clock: Arc<dyn Clock>,
}

impl BlogCommandService {
    pub fn new(
        write_repo: Arc<dyn BlogPostWriteRepository>,
        read_repo: Arc<dyn BlogPostReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub async fn create_post(&self, command: CreateBlogPostCommand) -> ApplicationResult<BlogPostDto> {
        let slug = Slug::parse(command.slug)?;
        if self.read_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a blog post with this slug already exists",
            ));
        }

        let now = self.clock.now();
        let publish = PublishTransition::on_create(command.published, now);
        let post = BlogPost {
            slug,
            title: Title::new(command.title)?,
            body: Body::new(command.body),
            published: publish.published,
            published_at: publish.published_at,
            updated_at: now,
            featured_image: command.featured_image,
            categories: command.categories,
            tags: command.tags,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
        };

        let created = self.write_repo.insert(post).await?;
        Ok(created.into())
    }

    pub async fn update_post(
        &self,
        slug: &str,
        command: UpdateBlogPostCommand,
    ) -> ApplicationResult<BlogPostDto> {
        let slug = Slug::parse(slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blog post not found"))?;

        let now = self.clock.now();
        let changes = BlogPostChanges {
            title: command.title.map(Title::new).transpose()?,
            body: command.body.map(Body::new),
            publish: command
                .published
                .map(|published| PublishTransition::evaluate(existing.published_at, published, now)),
            featured_image: command.featured_image,
            categories: command.categories,
            tags: command.tags,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
            updated_at: now,
        };

        let rename_target = match command.slug {
            Some(requested) => {
                let requested = Slug::parse(requested)?;
                (requested != slug).then_some(requested)
            }
            None => None,
        };

        let Some(new_slug) = rename_target else {
            let updated = self.write_repo.update(&slug, changes).await?;
            return Ok(updated.into());
        };

        if self.read_repo.find_by_slug(&new_slug).await?.is_some() {
            return Err(ApplicationError::conflict(
                "the requested slug is already in use",
            ));
        }

        // Insert-then-delete keeps the record reachable if the delete fails.
        let merged = existing.apply_changes(new_slug, changes);
        let created = self.write_repo.insert(merged).await?;
        self.write_repo.delete(&slug).await?;
        Ok(created.into())
    }

    pub async fn delete_post(&self, slug: &str) -> ApplicationResult<()> {
        let slug = Slug::parse(slug)?;
        self.write_repo.delete(&slug).await?;
        Ok(())
    }
}
