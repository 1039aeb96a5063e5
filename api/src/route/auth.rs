use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, register};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}
