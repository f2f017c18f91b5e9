// src/application/commands/users/google.rs
use super::UserCommandService;
use super::login::LoginResult;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::Email,
};

pub struct GoogleLoginCommand {
    pub id_token: String,
}

impl UserCommandService {
    /// Exchanges a verified Google/Firebase ID token for a local session.
    ///
    /// The external identity must correspond to an already-registered user;
    /// sign-in never provisions accounts.
    pub async fn login_with_google(
        &self,
        command: GoogleLoginCommand,
    ) -> ApplicationResult<LoginResult> {
        let verifier = self.id_token_verifier.as_ref().ok_or_else(|| {
            ApplicationError::infrastructure("google sign-in is not configured")
        })?;

        let identity = verifier.verify(&command.id_token).await?;
        let email = Email::new(identity.email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account is not registered"))?;

        let token = self.issue_token(&user).await?;
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }
}
