// src/infrastructure/repositories/sqlite/portfolio.rs
use super::super::map_sqlx;
use crate::domain::content::{Body, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::portfolio::{
    CaseResults, Illustration, Objective, PortfolioImages, PortfolioItem, PortfolioItemChanges,
    PortfolioReadRepository, PortfolioWriteRepository, Reflections,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, types::Json};

const COLUMNS: &str = "slug, title, body, published, published_at, updated_at, featured_image, \
                       kind, category, status, featured, display_order, client, year, tags, link, \
                       images, objectives, results, reflections, illustration, seo_title, \
                       seo_description";

#[derive(Clone)]
pub struct SqlitePortfolioRepository {
    pool: SqlitePool,
}

impl SqlitePortfolioRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PortfolioItemRow {
    slug: String,
    title: String,
    body: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    featured_image: Option<String>,
    kind: Option<String>,
    category: Option<String>,
    status: Option<String>,
    featured: bool,
    display_order: i32,
    client: Option<String>,
    year: Option<String>,
    tags: Option<Json<Vec<String>>>,
    link: Option<String>,
    images: Option<Json<PortfolioImages>>,
    objectives: Option<Json<Vec<Objective>>>,
    results: Option<Json<CaseResults>>,
    reflections: Option<Json<Reflections>>,
    illustration: Option<Json<Illustration>>,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl TryFrom<PortfolioItemRow> for PortfolioItem {
    type Error = DomainError;

    fn try_from(row: PortfolioItemRow) -> Result<Self, Self::Error> {
        Ok(PortfolioItem {
            slug: Slug::parse(row.slug)?,
            title: Title::new(row.title)?,
            body: Body::new(row.body),
            published: row.published,
            published_at: row.published_at,
            updated_at: row.updated_at,
            featured_image: row.featured_image,
            kind: row.kind,
            category: row.category,
            status: row.status,
            featured: row.featured,
            display_order: row.display_order,
            client: row.client,
            year: row.year,
            tags: row.tags.map(|json| json.0).unwrap_or_default(),
            link: row.link,
            images: row.images.map(|json| json.0),
            objectives: row.objectives.map(|json| json.0),
            results: row.results.map(|json| json.0),
            reflections: row.reflections.map(|json| json.0),
            illustration: row.illustration.map(|json| json.0),
            seo_title: row.seo_title,
            seo_description: row.seo_description,
        })
    }
}

#[async_trait]
impl PortfolioWriteRepository for SqlitePortfolioRepository {
    async fn insert(&self, item: PortfolioItem) -> DomainResult<PortfolioItem> {
        let row = sqlx::query_as::<_, PortfolioItemRow>(&format!(
            "INSERT INTO portfolio_items ({COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, \
             ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(item.slug.as_str())
        .bind(item.title.as_str())
        .bind(item.body.as_str())
        .bind(item.published)
        .bind(item.published_at)
        .bind(item.updated_at)
        .bind(&item.featured_image)
        .bind(&item.kind)
        .bind(&item.category)
        .bind(&item.status)
        .bind(item.featured)
        .bind(item.display_order)
        .bind(&item.client)
        .bind(&item.year)
        .bind(Json(&item.tags))
        .bind(&item.link)
        .bind(item.images.as_ref().map(Json))
        .bind(item.objectives.as_ref().map(Json))
        .bind(item.results.as_ref().map(Json))
        .bind(item.reflections.as_ref().map(Json))
        .bind(item.illustration.as_ref().map(Json))
        .bind(&item.seo_title)
        .bind(&item.seo_description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        PortfolioItem::try_from(row)
    }

    async fn update(
        &self,
        slug: &Slug,
        changes: PortfolioItemChanges,
    ) -> DomainResult<PortfolioItem> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE portfolio_items SET updated_at = ");
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
        if let Some(featured_image) = changes.featured_image {
            builder.push(", featured_image = ");
            builder.push_bind(featured_image);
        }
        if let Some(kind) = changes.kind {
            builder.push(", kind = ");
            builder.push_bind(kind);
        }
        if let Some(category) = changes.category {
            builder.push(", category = ");
            builder.push_bind(category);
        }
        if let Some(status) = changes.status {
            builder.push(", status = ");
            builder.push_bind(status);
        }
        if let Some(featured) = changes.featured {
            builder.push(", featured = ");
            builder.push_bind(featured);
        }
        if let Some(display_order) = changes.display_order {
            builder.push(", display_order = ");
            builder.push_bind(display_order);
        }
        if let Some(client) = changes.client {
            builder.push(", client = ");
            builder.push_bind(client);
        }
        if let Some(year) = changes.year {
            builder.push(", year = ");
            builder.push_bind(year);
        }
        if let Some(tags) = changes.tags {
            builder.push(", tags = ");
            builder.push_bind(Json(tags));
        }
        if let Some(link) = changes.link {
            builder.push(", link = ");
            builder.push_bind(link);
        }
        if let Some(images) = changes.images {
            builder.push(", images = ");
            builder.push_bind(images.map(Json));
        }
        if let Some(objectives) = changes.objectives {
            builder.push(", objectives = ");
            builder.push_bind(objectives.map(Json));
        }
        if let Some(results) = changes.results {
            builder.push(", results = ");
            builder.push_bind(results.map(Json));
        }
        if let Some(reflections) = changes.reflections {
            builder.push(", reflections = ");
            builder.push_bind(reflections.map(Json));
        }
        if let Some(illustration) = changes.illustration {
            builder.push(", illustration = ");
            builder.push_bind(illustration.map(Json));
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
            .build_query_as::<PortfolioItemRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("portfolio item not found".into()))?;

        PortfolioItem::try_from(row)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("portfolio item not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioReadRepository for SqlitePortfolioRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PortfolioItem>> {
        let row = sqlx::query_as::<_, PortfolioItemRow>(&format!(
            "SELECT {COLUMNS} FROM portfolio_items WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(PortfolioItem::try_from).transpose()
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<PortfolioItem>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM portfolio_items"));
        if published_only {
            builder.push(" WHERE published = 1");
        }
        builder.push(" ORDER BY display_order ASC, updated_at DESC");

        let rows = builder
            .build_query_as::<PortfolioItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(PortfolioItem::try_from).collect()
    }
}
