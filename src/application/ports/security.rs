// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject, VerifiedIdentity},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}

/// Verifies an externally issued identity token (Google/Firebase) and yields
/// the identity claims we care about.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> ApplicationResult<VerifiedIdentity>;
}
