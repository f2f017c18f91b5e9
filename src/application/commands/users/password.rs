// src/application/commands/users/password.rs
use crate::application::error::{ApplicationError, ApplicationResult};

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.trim().is_empty() {
        return Err(ApplicationError::validation("password cannot be empty"));
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApplicationError::validation(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_rejected() {
        assert!(validate_password("seven77").is_err());
        assert!(validate_password("eight888").is_ok());
    }

    #[test]
    fn blank_passwords_are_rejected() {
        assert!(validate_password("        ").is_err());
    }
}
