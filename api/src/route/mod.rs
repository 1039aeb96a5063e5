pub mod appointment;
pub mod auth;
pub mod health;

use axum::Router;
use registry::AppRegistry;

use self::{
    appointment::build_appointment_routers, auth::build_auth_routers,
    health::build_health_check_routers,
};

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_appointment_routers());
    Router::new().nest("/api", router)
}
