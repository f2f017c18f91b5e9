// src/infrastructure/repositories/sqlite/pages.rs
use super::super::map_sqlx;
use crate::domain::content::{Body, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::page::{Page, PageChanges, PageReadRepository, PageWriteRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const COLUMNS: &str =
    "slug, title, body, published, published_at, updated_at, seo_title, seo_description";

#[derive(Clone)]
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PageRow {
    slug: String,
    title: String,
    body: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl TryFrom<PageRow> for Page {
    type Error = DomainError;

    fn try_from(row: PageRow) -> Result<Self, Self::Error> {
        Ok(Page {
            slug: Slug::parse_path(row.slug)?,
            title: Title::new(row.title)?,
            body: Body::new(row.body),
            published: row.published,
            published_at: row.published_at,
            updated_at: row.updated_at,
            seo_title: row.seo_title,
            seo_description: row.seo_description,
        })
    }
}

#[async_trait]
impl PageWriteRepository for SqlitePageRepository {
    async fn insert(&self, page: Page) -> DomainResult<Page> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "INSERT INTO pages ({COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(page.slug.as_str())
        .bind(page.title.as_str())
        .bind(page.body.as_str())
        .bind(page.published)
        .bind(page.published_at)
        .bind(page.updated_at)
        .bind(&page.seo_title)
        .bind(&page.seo_description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Page::try_from(row)
    }

    async fn update(&self, slug: &Slug, changes: PageChanges) -> DomainResult<Page> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE pages SET updated_at = ");
        builder.push_bind(changes.updated_at);

        if let Some(title) = changes.title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(body) = changes.body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }
        if let Some(publish) = changes.publish {
            builder.push(", published = ");
            builder.push_bind(publish.published);
            builder.push(", published_at = ");
            builder.push_bind(publish.published_at);
        }
        if let Some(seo_title) = changes.seo_title {
            builder.push(", seo_title = ");
            builder.push_bind(seo_title);
        }
        if let Some(seo_description) = changes.seo_description {
            builder.push(", seo_description = ");
            builder.push_bind(seo_description);
        }

        builder.push(" WHERE slug = ");
        builder.push_bind(slug.as_str());
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<PageRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;

        Page::try_from(row)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM pages WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("page not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PageReadRepository for SqlitePageRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let row = sqlx::query_as::<_, PageRow>(&format!(
            "SELECT {COLUMNS} FROM pages WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Page::try_from).transpose()
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<Page>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM pages"));
        if published_only {
            builder.push(" WHERE published = 1");
        }
        builder.push(" ORDER BY slug ASC");

        let rows = builder
            .build_query_as::<PageRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Page::try_from).collect()
    }
}
