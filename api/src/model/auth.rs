use garde::Validate;
use kernel::model::{role::Role, user::event::CreateUser};
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    // Absent fields deserialize to "" so that absence and emptiness both
    // fail the same presence check.
    #[serde(default)]
    #[garde(length(min = 1))]
    pub username: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub password: String,
}

impl From<RegisterRequest> for CreateUser {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest { username, password } = value;
        CreateUser { username, password }
    }
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleName {
    Admin,
    #[default]
    User,
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[garde(length(min = 1))]
    pub username: String,
    #[serde(default)]
    #[garde(length(min = 1))]
    pub password: String,
    // A claim only. It is checked against the stored role; when absent it
    // defaults to the entity default.
    #[serde(default)]
    #[garde(skip)]
    pub role: RoleName,
}
