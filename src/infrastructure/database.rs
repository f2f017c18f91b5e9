// src/infrastructure/database.rs
use sqlx::{PgPool, SqlitePool, postgres::PgPoolOptions, sqlite::SqlitePoolOptions};

/// The backend is picked from the connection URL scheme at startup; every
/// repository behind it speaks through the domain traits, so nothing above
/// this layer knows which engine is in use.
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
            let pool = PgPoolOptions::new()
                .max_connections(16)
                .connect(database_url)
                .await?;
            Ok(Self::Postgres(pool))
        } else if database_url.starts_with("sqlite:") {
            let pool = SqlitePoolOptions::new()
                .max_connections(16)
                .connect(database_url)
                .await?;
            sqlx::query("PRAGMA foreign_keys = ON;").execute(&pool).await?;
            Ok(Self::Sqlite(pool))
        } else {
            Err(sqlx::Error::Configuration(
                format!("unsupported DATABASE_URL scheme in '{database_url}'").into(),
            ))
        }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        match self {
            Self::Postgres(pool) => sqlx::migrate!("migrations/postgres").run(pool).await,
            Self::Sqlite(pool) => sqlx::migrate!("migrations/sqlite").run(pool).await,
        }
    }
}
