// src/application/commands/users/bootstrap.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::error::ApplicationResult,
    domain::user::{Email, NewUser, PasswordHash},
};

impl UserCommandService {
    /// First-run seeding: create the admin account if it does not exist yet.
    /// Called from startup when ADMIN_EMAIL/ADMIN_PASSWORD are configured.
    pub async fn ensure_admin(&self, email: &str, password: &str) -> ApplicationResult<bool> {
        let email = Email::new(email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Ok(false);
        }

        validate_password(password)?;
        let hashed = self.password_hasher.hash(password).await?;
        self.user_repo
            .insert(NewUser {
                email,
                password_hash: PasswordHash::new(hashed)?,
                display_name: None,
                photo_url: None,
                created_at: self.clock.now(),
            })
            .await?;
        Ok(true)
    }
}
