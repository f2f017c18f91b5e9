// src/application/commands/pages.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        content::{Body, PublishTransition, Slug, Title},
        page::{Page, PageChanges, PageReadRepository, PageWriteRepository},
    },
};

pub struct CreatePageCommand {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

#[derive(Default)]
pub struct UpdatePageCommand {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub published: Option<bool>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
}

pub struct PageCommandService {
    write_repo: Arc<dyn PageWriteRepository>,
    read_repo: Arc<dyn PageReadRepository>,
    clock: Arc<dyn Clock>,
}

impl PageCommandService {
    pub fn new(
        write_repo: Arc<dyn PageWriteRepository>,
        read_repo: Arc<dyn PageReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let slug = Slug::parse_path(command.slug)?;
        if self.read_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a page with this slug already exists",
            ));
        }

        let now = self.clock.now();
        let publish = PublishTransition::on_create(command.published, now);
        let page = Page {
            slug,
            title: Title::new(command.title)?,
            body: Body::new(command.body),
            published: publish.published,
            published_at: publish.published_at,
            updated_at: now,
            seo_title: command.seo_title,
            seo_description: command.seo_description,
        };

        let created = self.write_repo.insert(page).await?;
        Ok(created.into())
    }

    pub async fn update_page(
        &self,
        slug: &str,
        command: UpdatePageCommand,
    ) -> ApplicationResult<PageDto> {
        let slug = Slug::parse_path(slug)?;
        let existing = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let now = self.clock.now();
        let changes = PageChanges {
            title: command.title.map(Title::new).transpose()?,
            body: command.body.map(Body::new),
            publish: command
                .published
                .map(|published| PublishTransition::evaluate(existing.published_at, published, now)),
            seo_title: command.seo_title,
            seo_description: command.seo_description,
            updated_at: now,
        };

        let rename_target = match command.slug {
            Some(requested) => {
                let requested = Slug::parse_path(requested)?;
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

    pub async fn delete_page(&self, slug: &str) -> ApplicationResult<()> {
        let slug = Slug::parse_path(slug)?;
        self.write_repo.delete(&slug).await?;
        Ok(())
    }
}
