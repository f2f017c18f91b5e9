// src/infrastructure/repositories/mod.rs
mod postgres;
mod sqlite;

use std::sync::Arc;

use crate::domain::{
    blog::{BlogCategoryRepository, BlogPostReadRepository, BlogPostWriteRepository},
    errors::DomainError,
    links::SocialLinksRepository,
    page::{PageReadRepository, PageWriteRepository},
    portfolio::{PortfolioReadRepository, PortfolioWriteRepository},
    user::UserRepository,
};
use sqlx::{PgPool, SqlitePool};

pub use postgres::{
    PostgresBlogRepository, PostgresCategoryRepository, PostgresPageRepository,
    PostgresPortfolioRepository, PostgresSocialLinksRepository, PostgresUserRepository,
};
pub use sqlite::{
    SqliteBlogRepository, SqliteCategoryRepository, SqlitePageRepository,
    SqlitePortfolioRepository, SqliteSocialLinksRepository, SqliteUserRepository,
};

pub(crate) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation => {
                DomainError::Conflict("unique constraint violated".into())
            }
            sqlx::error::ErrorKind::ForeignKeyViolation => {
                DomainError::NotFound("referenced record not found".into())
            }
            sqlx::error::ErrorKind::CheckViolation => {
                DomainError::Validation("check constraint violated".into())
            }
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Repository bundle wired for one backend.
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub blog_read: Arc<dyn BlogPostReadRepository>,
    pub blog_write: Arc<dyn BlogPostWriteRepository>,
    pub categories: Arc<dyn BlogCategoryRepository>,
    pub portfolio_read: Arc<dyn PortfolioReadRepository>,
    pub portfolio_write: Arc<dyn PortfolioWriteRepository>,
    pub page_read: Arc<dyn PageReadRepository>,
    pub page_write: Arc<dyn PageWriteRepository>,
    pub social_links: Arc<dyn SocialLinksRepository>,
}

impl Repositories {
    pub fn postgres(pool: PgPool) -> Self {
        let blog = Arc::new(PostgresBlogRepository::new(pool.clone()));
        let portfolio = Arc::new(PostgresPortfolioRepository::new(pool.clone()));
        let pages = Arc::new(PostgresPageRepository::new(pool.clone()));
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            blog_read: blog.clone(),
            blog_write: blog,
            categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
            portfolio_read: portfolio.clone(),
            portfolio_write: portfolio,
            page_read: pages.clone(),
            page_write: pages,
            social_links: Arc::new(PostgresSocialLinksRepository::new(pool)),
        }
    }

    pub fn sqlite(pool: SqlitePool) -> Self {
        let blog = Arc::new(SqliteBlogRepository::new(pool.clone()));
        let portfolio = Arc::new(SqlitePortfolioRepository::new(pool.clone()));
        let pages = Arc::new(SqlitePageRepository::new(pool.clone()));
        Self {
            users: Arc::new(SqliteUserRepository::new(pool.clone())),
            blog_read: blog.clone(),
            blog_write: blog,
            categories: Arc::new(SqliteCategoryRepository::new(pool.clone())),
            portfolio_read: portfolio.clone(),
            portfolio_write: portfolio,
            page_read: pages.clone(),
            page_write: pages,
            social_links: Arc::new(SqliteSocialLinksRepository::new(pool)),
        }
    }
}
