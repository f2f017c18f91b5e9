// src/main.rs
use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use atelier_cms::application::{
    ports::security::IdTokenVerifier,
    services::{ApplicationServices, Dependencies},
};
use atelier_cms::config::AppConfig;
use atelier_cms::infrastructure::{
    database::Database,
    repositories::Repositories,
    security::{Argon2PasswordHasher, FirebaseTokenVerifier, JwtTokenManager},
    storage::LocalFileStore,
    time::SystemClock,
};
use atelier_cms::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let database = Database::connect(config.database_url()).await?;
    database.run_migrations().await?;
    let repos = match &database {
        Database::Postgres(pool) => Repositories::postgres(pool.clone()),
        Database::Sqlite(pool) => Repositories::sqlite(pool.clone()),
    };

    let clock = Arc::new(SystemClock);
    let id_token_verifier: Option<Arc<dyn IdTokenVerifier>> = match config.firebase_project_id() {
        Some(project_id) => Some(Arc::new(FirebaseTokenVerifier::new(project_id)?)),
        None => None,
    };

    let services = Arc::new(ApplicationServices::new(Dependencies {
        users: repos.users,
        blog_read: repos.blog_read,
        blog_write: repos.blog_write,
        categories: repos.categories,
        portfolio_read: repos.portfolio_read,
        portfolio_write: repos.portfolio_write,
        page_read: repos.page_read,
        page_write: repos.page_write,
        social_links: repos.social_links,
        password_hasher: Arc::new(Argon2PasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(
            config.jwt_secret(),
            config.token_ttl(),
        )),
        id_token_verifier,
        file_store: Arc::new(LocalFileStore::new(
            config.storage_path().clone(),
            clock.clone(),
        )),
        clock,
    }));

    if let Some((email, password)) = config.admin_credentials() {
        match services.user_commands.ensure_admin(email, password).await {
            Ok(true) => tracing::info!(email, "admin account created"),
            Ok(false) => tracing::debug!(email, "admin account already present"),
            Err(err) => tracing::warn!(error = %err, "admin bootstrap failed"),
        }
    }

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins(), config.max_upload_bytes());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
