use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::health::{api_test, health_check, health_check_db};

pub fn build_health_check_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/test", get(api_test))
        .route("/health", get(health_check))
        .route("/health/db", get(health_check_db))
}
