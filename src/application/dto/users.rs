// src/application/dto/users.rs
use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub uid: i64,
    pub email: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    // Casing kept from the admin-panel clients.
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            uid: user.id.into(),
            email: user.email.into(),
            display_name: user.display_name,
            photo_url: user.photo_url,
        }
    }
}
