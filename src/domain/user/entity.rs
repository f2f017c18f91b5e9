// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub password_hash: Option<PasswordHash>,
    pub updated_at: DateTime<Utc>,
}

impl UserUpdate {
    pub fn new(id: UserId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            password_hash: None,
            updated_at,
        }
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}
