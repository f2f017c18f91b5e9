// src/infrastructure/repositories/sqlite/categories.rs
use super::super::map_sqlx;
use crate::domain::blog::{BlogCategory, BlogCategoryRepository, CategoryName};
use crate::domain::content::Slug;
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    slug: String,
    name: String,
}

impl TryFrom<CategoryRow> for BlogCategory {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(BlogCategory {
            slug: Slug::parse(row.slug)?,
            name: CategoryName::new(row.name)?,
        })
    }
}

#[async_trait]
impl BlogCategoryRepository for SqliteCategoryRepository {
    async fn insert(&self, category: BlogCategory) -> DomainResult<BlogCategory> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO blog_categories (slug, name) VALUES (?, ?) RETURNING slug, name",
        )
        .bind(category.slug.as_str())
        .bind(category.name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogCategory::try_from(row)
    }

    async fn rename(&self, slug: &Slug, name: CategoryName) -> DomainResult<BlogCategory> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "UPDATE blog_categories SET name = ? WHERE slug = ? RETURNING slug, name",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("category not found".into()))?;

        BlogCategory::try_from(row)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_categories WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("category not found".into()));
        }
        Ok(())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogCategory>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "SELECT slug, name FROM blog_categories WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogCategory::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<BlogCategory>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT slug, name FROM blog_categories ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(BlogCategory::try_from).collect()
    }
}
