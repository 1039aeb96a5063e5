use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct CredentialRow {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<CredentialRow> for User {
    type Error = AppError;

    fn try_from(value: CredentialRow) -> Result<Self, Self::Error> {
        let CredentialRow {
            user_id,
            username,
            password_hash: _,
            role,
        } = value;
        Ok(User {
            user_id,
            username,
            role: Role::from_str(&role)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
        })
    }
}
