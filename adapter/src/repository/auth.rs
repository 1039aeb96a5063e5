use crate::database::{model::auth::CredentialRow, ConnectionPool};
use crate::password::verify_password;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{role::Role, user::User};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, username: &str, password: &str, role: Role) -> AppResult<User> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
                SELECT user_id, username, password_hash, role
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError);
        };

        if !verify_password(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError);
        }

        // The stored record is authoritative for the role. The claim on
        // the wire must match it, not the other way around.
        let user = User::try_from(row)?;
        if user.role != role {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(user)
    }
}
