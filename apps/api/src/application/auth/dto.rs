use crate::domain::{profile::entity::Profile, user::value_objects::USERNAME_REGEX};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthInput {
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "username must be 1-20 letters, digits, '_', '.' or '-'"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    pub profile: Option<Profile>,
}
