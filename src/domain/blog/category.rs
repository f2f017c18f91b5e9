// src/domain/blog/category.rs
use crate::domain::content::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct BlogCategory {
    pub slug: Slug,
    pub name: CategoryName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "category name cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

#[async_trait]
pub trait BlogCategoryRepository: Send + Sync {
    async fn insert(&self, category: BlogCategory) -> DomainResult<BlogCategory>;
    async fn rename(&self, slug: &Slug, name: CategoryName) -> DomainResult<BlogCategory>;
    async fn delete(&self, slug: &Slug) -> DomainResult<()>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogCategory>>;
    async fn list(&self) -> DomainResult<Vec<BlogCategory>>;
}
