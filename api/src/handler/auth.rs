use crate::model::auth::{LoginRequest, RegisterRequest};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppError;

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(username = %req.username, "register requested");
    req.validate(&())?;

    registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Registered successfully" })),
    ))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;

    let user = registry
        .auth_repository()
        .verify_user(&req.username, &req.password, req.role.into())
        .await?;
    tracing::info!(user_id = %user.user_id, "login accepted");

    Ok(Json(serde_json::json!({ "message": "Login ok" })))
}
