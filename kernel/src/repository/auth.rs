use crate::model::{role::Role, user::User};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // Unknown user, wrong password and role mismatch are all the same
    // authentication failure.
    async fn verify_user(&self, username: &str, password: &str, role: Role) -> AppResult<User>;
}
