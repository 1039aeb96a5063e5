use crate::model::{id::UserId, user::event::CreateUser};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // The storage layer's uniqueness constraint on the username is the
    // authoritative conflict signal.
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
}
