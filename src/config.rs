// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    jwt_secret: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    storage_path: PathBuf,
    firebase_project_id: Option<String>,
    admin_credentials: Option<(String, String)>,
    max_upload_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://atelier.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

/// Seven days, matching the session lifetime the admin panel was built for.
fn default_token_ttl() -> u64 {
    60 * 60 * 24 * 7
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl AppConfig {
    /// Build configuration from environment variables. Optional values fall
    /// back to defaults; required keys are validated up front.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;
        if jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "JWT_SECRET must be at least 32 characters".into(),
            ));
        }

        let token_ttl_secs = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(default_token_ttl);

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let storage_path = env::var("STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./storage"));

        let firebase_project_id = env::var("FIREBASE_PROJECT_ID")
            .ok()
            .filter(|value| !value.trim().is_empty());

        let admin_credentials = match (env::var("ADMIN_EMAIL").ok(), env::var("ADMIN_PASSWORD").ok())
        {
            (Some(email), Some(password)) => Some((email, password)),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "ADMIN_EMAIL and ADMIN_PASSWORD must be set together".into(),
                ));
            }
        };

        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .unwrap_or_else(default_max_upload_bytes);

        Ok(Self {
            database_url,
            listen_addr,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            storage_path,
            firebase_project_id,
            admin_credentials,
            max_upload_bytes,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Configured CORS origins; empty means "mirror the request's Origin".
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn storage_path(&self) -> &PathBuf {
        &self.storage_path
    }

    pub fn firebase_project_id(&self) -> Option<&str> {
        self.firebase_project_id.as_deref()
    }

    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        self.admin_credentials
            .as_ref()
            .map(|(email, password)| (email.as_str(), password.as_str()))
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
