// src/infrastructure/repositories/postgres/links.rs
use super::super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::links::{SocialLinks, SocialLinksRepository, SocialLinksUpdate};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// The table holds a single row keyed by the fixed id `socials`.
#[derive(Clone)]
pub struct PostgresSocialLinksRepository {
    pool: PgPool,
}

impl PostgresSocialLinksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SocialLinksRow {
    instagram: Option<String>,
    linkedin: Option<String>,
}

impl From<SocialLinksRow> for SocialLinks {
    fn from(row: SocialLinksRow) -> Self {
        Self {
            instagram: row.instagram,
            linkedin: row.linkedin,
        }
    }
}

#[async_trait]
impl SocialLinksRepository for PostgresSocialLinksRepository {
    async fn get(&self) -> DomainResult<Option<SocialLinks>> {
        let row = sqlx::query_as::<_, SocialLinksRow>(
            "SELECT instagram, linkedin FROM social_links WHERE id = 'socials'",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, update: SocialLinksUpdate) -> DomainResult<SocialLinks> {
        // COALESCE keeps fields absent from the payload untouched.
        let row = sqlx::query_as::<_, SocialLinksRow>(
            "INSERT INTO social_links (id, instagram, linkedin) VALUES ('socials', $1, $2)
             ON CONFLICT (id) DO UPDATE SET
                 instagram = COALESCE(EXCLUDED.instagram, social_links.instagram),
                 linkedin = COALESCE(EXCLUDED.linkedin, social_links.linkedin)
             RETURNING instagram, linkedin",
        )
        .bind(&update.instagram)
        .bind(&update.linkedin)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
