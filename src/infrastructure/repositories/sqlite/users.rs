// src/infrastructure/repositories/sqlite/users.rs
use super::super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{Email, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const COLUMNS: &str = "id, email, password_hash, display_name, photo_url, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    display_name: Option<String>,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            display_name: row.display_name,
            photo_url: row.photo_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, user: NewUser) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (email, password_hash, display_name, photo_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        ))
        .bind(user.email.as_str())
        .bind(user.password_hash.as_str())
        .bind(&user.display_name)
        .bind(&user.photo_url)
        .bind(user.created_at)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET
                 password_hash = COALESCE(?, password_hash),
                 updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        ))
        .bind(update.password_hash.as_ref().map(PasswordHash::as_str))
        .bind(update.updated_at)
        .bind(i64::from(update.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("SELECT {COLUMNS} FROM users WHERE id = ?"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row =
            sqlx::query_as::<_, UserRow>(&format!("SELECT {COLUMNS} FROM users WHERE email = ?"))
                .bind(email.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }
}
