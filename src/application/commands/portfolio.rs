// src/application/commands/portfolio.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PortfolioItemDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{Body, PublishTransition, Slug, Title},
        portfolio::{
            CaseResults, Illustration, Objective, PortfolioImages, PortfolioItem,
            PortfolioItemChanges, PortfolioReadRepository, PortfolioWriteRepository, Reflections,
        },
    },
};

pub struct CreatePortfolioItemCommand {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
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

#[derive(Default)]
pub struct UpdatePortfolioItemCommand {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
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
}

pub struct PortfolioCommandService {
    write_repo: Arc<dyn PortfolioWriteRepository>,
    read_repo: Arc<dyn PortfolioReadRepository>,
    clock: Arc<dyn Clock>,
}

impl PortfolioCommandService {
    pub fn new(
        write_repo: Arc<dyn PortfolioWriteRepository>,
        read_repo: Arc<dyn PortfolioReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub async fn create_item(
        &self,
        command: CreatePortfolioItemCommand,
    ) -> ApplicationResult<PortfolioItemDto> {
        let slug = Slug::parse(command.slug)?;
        if self.read_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a portfolio item with this slug already exists",
            ));
        }

        let now = self.clock.now();
        let publish = PublishTransition::on_create(command.published, now);
        let item = PortfolioItem {
            slug,
            title: Title::new(command.title)?,
            body: Body::new(command.body),
            published: publish.published,
            published_at: publish.published_at,
            updated_at: now,
            featured_image: command.featured_image,
            kind: command.kind,
            category: command.category,
            status: command.status,
            featured: command.featured,
            display_order: command.display_order,
            client: command.client,
            year: command.year,
            tags: command.tags,
            link: command.link,
            images: command.images,
            objectives: command.objectives,
            results: command.results,
            reflections: command.reflections,
            illustration: command.illustration,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
        };

        let created = self.write_repo.insert(item).await?;
        Ok(created.into())
    }

    pub async fn update_item(
        &self,
        slug: &str,
        command: UpdatePortfolioItemCommand,
    ) -> ApplicationResult<PortfolioItemDto> {
        let slug = Slug::parse(slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("portfolio item not found"))?;

        let now = self.clock.now();
        let changes = PortfolioItemChanges {
            title: command.title.map(Title::new).transpose()?,
            body: command.body.map(Body::new),
            publish: command
                .published
                .map(|published| PublishTransition::evaluate(existing.published_at, published, now)),
            featured_image: command.featured_image,
            kind: command.kind,
            category: command.category,
            status: command.status,
            featured: command.featured,
            display_order: command.display_order,
            client: command.client,
            year: command.year,
            tags: command.tags,
            link: command.link,
            images: command.images,
            objectives: command.objectives,
            results: command.results,
            reflections: command.reflections,
            illustration: command.illustration,
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

        let merged = existing.apply_changes(new_slug, changes);
        let created = self.write_repo.insert(merged).await?;
        self.write_repo.delete(&slug).await?;
        Ok(created.into())
    }

    pub async fn delete_item(&self, slug: &str) -> ApplicationResult<()> {
        let slug = Slug::parse(slug)?;
        self.write_repo.delete(&slug).await?;
        Ok(())
    }
}
