// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HS256 session tokens. Stateless by design: there is no server-side
/// session record, so revocation happens only through expiry.
pub struct JwtTokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    email: String,
    iat: i64,
    exp: i64,
}

impl JwtTokenManager {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl,
        }
    }

    fn ttl_chrono(&self) -> ApplicationResult<ChronoDuration> {
        ChronoDuration::from_std(self.ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn timestamp_to_datetime(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| ApplicationError::unauthorized("token carries an invalid timestamp"))
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl_chrono()?;

        let claims = Claims {
            sub: subject.user_id.into(),
            email: subject.email,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.as_secs() as i64,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        Ok(AuthenticatedUser {
            id: UserId::new(data.claims.sub)?,
            email: data.claims.email,
            issued_at: timestamp_to_datetime(data.claims.iat)?,
            expires_at: timestamp_to_datetime(data.claims.exp)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> JwtTokenManager {
        JwtTokenManager::new(
            "test-secret-test-secret-test-secret",
            Duration::from_secs(3600),
        )
    }

    #[tokio::test]
    async fn issued_tokens_authenticate() {
        let manager = manager();
        let token = manager
            .issue(TokenSubject {
                user_id: UserId::new(7).unwrap(),
                email: "valentina@example.com".into(),
            })
            .await
            .unwrap();

        let user = manager.authenticate(&token.token).await.unwrap();
        assert_eq!(i64::from(user.id), 7);
        assert_eq!(user.email, "valentina@example.com");
    }

    #[tokio::test]
    async fn garbage_tokens_are_rejected() {
        let manager = manager();
        assert!(manager.authenticate("not-a-jwt").await.is_err());
    }

    #[tokio::test]
    async fn tokens_from_another_secret_are_rejected() {
        let manager = manager();
        let other = JwtTokenManager::new("another-secret-another-secret!!", Duration::from_secs(60));
        let token = other
            .issue(TokenSubject {
                user_id: UserId::new(1).unwrap(),
                email: "a@example.com".into(),
            })
            .await
            .unwrap();
        assert!(manager.authenticate(&token.token).await.is_err());
    }
}
