// src/infrastructure/security/firebase.rs
use crate::application::{
    dto::VerifiedIdentity,
    error::{ApplicationError, ApplicationResult},
    ports::security::IdTokenVerifier,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Google's JWKS for Firebase Authentication ID tokens.
const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// How long fetched keys are trusted before a refetch. Google rotates keys
/// slowly; unknown kids also force a refresh regardless of age.
const KEY_CACHE_TTL_HOURS: i64 = 6;

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<DateTime<Utc>>,
}

pub struct FirebaseTokenVerifier {
    project_id: String,
    http: reqwest::Client,
    cache: RwLock<KeyCache>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>) -> ApplicationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            project_id: project_id.into(),
            http,
            cache: RwLock::new(KeyCache {
                keys: HashMap::new(),
                fetched_at: None,
            }),
        })
    }

    async fn decoding_key(&self, kid: &str) -> ApplicationResult<DecodingKey> {
        {
            let cache = self.cache.read().await;
            let fresh = cache
                .fetched_at
                .is_some_and(|at| Utc::now() - at < Duration::hours(KEY_CACHE_TTL_HOURS));
            if fresh {
                if let Some(key) = cache.keys.get(kid) {
                    return Ok(key.clone());
                }
            }
        }

        self.refresh_keys().await?;

        let cache = self.cache.read().await;
        cache
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("token signed by an unknown key"))
    }

    async fn refresh_keys(&self) -> ApplicationResult<()> {
        let jwks: JwkSet = self
            .http
            .get(JWKS_URL)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .error_for_status()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .json()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let mut keys = HashMap::with_capacity(jwks.keys.len());
        for jwk in jwks.keys {
            let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            keys.insert(jwk.kid, key);
        }

        let mut cache = self.cache.write().await;
        cache.keys = keys;
        cache.fetched_at = Some(Utc::now());
        Ok(())
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.project_id]);
        validation.set_issuer(&[format!(
            "https://securetoken.google.com/{}",
            self.project_id
        )]);
        validation
    }
}

#[async_trait]
impl IdTokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, id_token: &str) -> ApplicationResult<VerifiedIdentity> {
        let header = jsonwebtoken::decode_header(id_token)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| ApplicationError::unauthorized("token is missing a key id"))?;

        let key = self.decoding_key(&kid).await?;
        let data = jsonwebtoken::decode::<FirebaseClaims>(id_token, &key, &self.validation())
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let claims = data.claims;
        let email = claims
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| ApplicationError::unauthorized("token carries no email claim"))?;

        Ok(VerifiedIdentity {
            subject: claims.sub,
            email,
            display_name: claims.name,
            photo_url: claims.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_pins_audience_and_issuer() {
        let verifier = FirebaseTokenVerifier::new("demo-project").unwrap();
        let validation = verifier.validation();
        assert!(validation.aud.as_ref().unwrap().contains("demo-project"));
        assert!(
            validation
                .iss
                .as_ref()
                .unwrap()
                .contains("https://securetoken.google.com/demo-project")
        );
    }
}
