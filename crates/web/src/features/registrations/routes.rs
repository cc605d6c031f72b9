use axum::{
    Router,
    routing::{get, post, put},
};

use crate::app::AppState;

use super::handlers::{
    get_registration, list_registrations, submit_registration, update_registration_status,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/competitions/:id/registrations", post(submit_registration))
        .route("/registrations", get(list_registrations))
        .route("/registrations/:id", get(get_registration))
        .route("/registrations/:id/status", put(update_registration_status))
}
