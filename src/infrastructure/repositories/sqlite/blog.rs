// src/infrastructure/repositories/sqlite/blog.rs
use super::super::map_sqlx;
use crate::domain::blog::{
    BlogPost, BlogPostChanges, BlogPostReadRepository, BlogPostWriteRepository,
};
use crate::domain::content::{Body, Slug, Title};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool, types::Json};

const COLUMNS: &str = "slug, title, body, published, published_at, updated_at, featured_image, \
                       categories, tags, seo_title, seo_description";

#[derive(Clone)]
pub struct SqliteBlogRepository {
    pool: SqlitePool,
}

impl SqliteBlogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogPostRow {
    slug: String,
    title: String,
    body: String,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    updated_at: DateTime<Utc>,
    featured_image: Option<String>,
    categories: Option<Json<Vec<String>>>,
    tags: Option<Json<Vec<String>>>,
    seo_title: Option<String>,
    seo_description: Option<String>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = DomainError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        Ok(BlogPost {
            slug: Slug::parse(row.slug)?,
            title: Title::new(row.title)?,
            body: Body::new(row.body),
            published: row.published,
            published_at: row.published_at,
            updated_at: row.updated_at,
            featured_image: row.featured_image,
            categories: row.categories.map(|json| json.0).unwrap_or_default(),
            tags: row.tags.map(|json| json.0).unwrap_or_default(),
            seo_title: row.seo_title,
            seo_description: row.seo_description,
        })
    }
}

#[async_trait]
impl BlogPostWriteRepository for SqliteBlogRepository {
    async fn insert(&self, post: BlogPost) -> DomainResult<BlogPost> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "INSERT INTO blog_posts ({COLUMNS})
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(post.slug.as_str())
        .bind(post.title.as_str())
        .bind(post.body.as_str())
        .bind(post.published)
        .bind(post.published_at)
        .bind(post.updated_at)
        .bind(&post.featured_image)
        .bind(Json(&post.categories))
        .bind(Json(&post.tags))
        .bind(&post.seo_title)
        .bind(&post.seo_description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlogPost::try_from(row)
    }

    async fn update(&self, slug: &Slug, changes: BlogPostChanges) -> DomainResult<BlogPost> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE blog_posts SET updated_at = ");
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
        if let Some(categories) = changes.categories {
            builder.push(", categories = ");
            builder.push_bind(Json(categories));
        }
        if let Some(tags) = changes.tags {
            builder.push(", tags = ");
            builder.push_bind(Json(tags));
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
        builder.push(&format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<BlogPostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("blog post not found".into()))?;

        BlogPost::try_from(row)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE slug = ?")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blog post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlogPostReadRepository for SqliteBlogRepository {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<BlogPost>> {
        let row = sqlx::query_as::<_, BlogPostRow>(&format!(
            "SELECT {COLUMNS} FROM blog_posts WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlogPost::try_from).transpose()
    }

    async fn list(&self, published_only: bool) -> DomainResult<Vec<BlogPost>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM blog_posts"));
        if published_only {
            builder.push(" WHERE published = 1");
        }
        builder.push(" ORDER BY published_at IS NULL, published_at DESC, updated_at DESC");

        let rows = builder
            .build_query_as::<BlogPostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(BlogPost::try_from).collect()
    }
}
