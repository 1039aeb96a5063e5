use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid credentials")]
    UnauthenticatedError,
    #[error("failed to run the database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("failed to process the password hash")]
    PasswordHashError(#[from] argon2::password_hash::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ValidationError(_)
            | AppError::ConversionEntityError(_)
            | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            e @ (AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::PasswordHashError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e, error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The cause of a server-side failure never reaches the client.
        let message = if status_code.is_server_error() {
            "Server error".to_string()
        } else {
            self.to_string()
        };

        (status_code, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_their_status() {
        let res = AppError::Conflict("Slot already booked".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::ConversionEntityError("bad date".into()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::UnauthenticatedError.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn server_errors_are_genericized() {
        let res = AppError::SpecificOperationError(sqlx::Error::RowNotFound).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "Server error");
    }

    #[tokio::test]
    async fn conflict_message_is_preserved() {
        let res = AppError::Conflict("Username already exists".into()).into_response();
        let body = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "Username already exists");
    }
}
