// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)?;
        let user = self
            .find_and_authenticate(&email, &command.password)
            .await?;

        let token = self.issue_token(&user).await?;
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    pub(super) async fn issue_token(&self, user: &User) -> ApplicationResult<AuthTokenDto> {
        self.token_manager
            .issue(TokenSubject {
                user_id: user.id,
                email: user.email.to_string(),
            })
            .await
    }

    async fn find_and_authenticate(&self, email: &Email, password: &str) -> ApplicationResult<User> {
        // Same error for unknown account and bad password.
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
