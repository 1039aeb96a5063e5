use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use registry::AppRegistry;

pub async fn api_test() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "API working" }))
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn health_check_db(State(registry): State<AppRegistry>) -> StatusCode {
    if registry.health_check_repository().check_db().await {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}
