use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::appointment::{book_appointment, show_appointment_list};

pub fn build_appointment_routers() -> Router<AppRegistry> {
    let appointment_routers = Router::new()
        .route("/", post(book_appointment))
        .route("/", get(show_appointment_list));

    Router::new().nest("/appointments", appointment_routers)
}
