// src/application/commands/users/change_password.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthTokenDto, AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
}

pub struct ChangePasswordResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    /// Re-authenticates with the current password, stores the new hash and
    /// issues a fresh session token.
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<ChangePasswordResult> {
        if command.current_password.trim().is_empty() {
            return Err(ApplicationError::validation("current password is required"));
        }
        validate_password(&command.new_password)?;
        if command.new_password == command.current_password {
            return Err(ApplicationError::validation(
                "new password must differ from the current one",
            ));
        }

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await
            .map_err(|_| ApplicationError::unauthorized("current password is incorrect"))?;

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(user.id, self.clock.now())
            .with_password_hash(PasswordHash::new(hashed)?);
        let updated = self.user_repo.update(update).await?;

        let token = self.issue_token(&updated).await?;
        Ok(ChangePasswordResult {
            token,
            user: updated.into(),
        })
    }
}
