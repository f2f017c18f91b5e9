// src/application/commands/categories.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::BlogCategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blog::{BlogCategory, BlogCategoryRepository, CategoryName},
        content::Slug,
    },
};

pub struct CreateCategoryCommand {
    pub slug: String,
    pub name: String,
}

pub struct UpdateCategoryCommand {
    pub name: String,
}

pub struct CategoryCommandService {
    repo: Arc<dyn BlogCategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn BlogCategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<BlogCategoryDto> {
        let slug = Slug::parse(command.slug)?;
        if self.repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(
                "a category with this slug already exists",
            ));
        }

        let category = BlogCategory {
            slug,
            name: CategoryName::new(command.name)?,
        };
        let created = self.repo.insert(category).await?;
        Ok(created.into())
    }

    /// Category slugs are referenced from blog posts by value, so the key is
    /// immutable; only the display name can change.
    pub async fn update_category(
        &self,
        slug: &str,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<BlogCategoryDto> {
        let slug = Slug::parse(slug)?;
        let name = CategoryName::new(command.name)?;
        let updated = self.repo.rename(&slug, name).await?;
        Ok(updated.into())
    }

    pub async fn delete_category(&self, slug: &str) -> ApplicationResult<()> {
        let slug = Slug::parse(slug)?;
        self.repo.delete(&slug).await?;
        Ok(())
    }
}
