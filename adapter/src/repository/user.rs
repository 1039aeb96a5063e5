use crate::database::ConnectionPool;
use crate::password::hash_password;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, role::Role, user::event::CreateUser};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let password_hash = hash_password(&event.password)?;

        // No prior existence check. The UNIQUE constraint on username
        // decides the conflict, also under concurrent registrations.
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, username, password_hash, role)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(&event.username)
        .bind(&password_hash)
        .bind(Role::User.as_ref())
        .execute(self.db.inner_ref())
        .await;

        match res {
            Ok(done) if done.rows_affected() < 1 => Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            )),
            Ok(_) => Ok(user_id),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(AppError::Conflict("Username already exists".into()))
            }
            Err(e) => Err(AppError::SpecificOperationError(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "../migrations")]
    async fn test_register_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        repo.create(CreateUser {
            username: "alice".into(),
            password: "open-sesame".into(),
        })
        .await?;

        let (role, password_hash): (String, String) =
            sqlx::query_as("SELECT role, password_hash FROM users WHERE username = $1")
                .bind("alice")
                .fetch_one(&pool)
                .await?;
        assert_eq!(role, "user");
        assert_ne!(password_hash, "open-sesame");

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn test_duplicate_username_is_a_conflict(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser {
            username: "alice".into(),
            password: "open-sesame".into(),
        })
        .await?;

        let err = repo
            .create(CreateUser {
                username: "alice".into(),
                password: "another-secret".into(),
            })
            .await
            .expect_err("second registration with the same username must fail");
        assert!(matches!(err, AppError::Conflict(_)));

        Ok(())
    }
}
