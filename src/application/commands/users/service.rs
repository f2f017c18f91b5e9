// src/application/commands/users/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{
        security::{IdTokenVerifier, PasswordHasher, TokenManager},
        time::Clock,
    },
    domain::user::UserRepository,
};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) id_token_verifier: Option<Arc<dyn IdTokenVerifier>>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        id_token_verifier: Option<Arc<dyn IdTokenVerifier>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            id_token_verifier,
            clock,
        }
    }
}
