use axum::{
    Router,
    routing::{get, post},
};

use crate::app::AppState;

use super::handlers::{list_schedules, publish_schedule};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schedules", get(list_schedules))
        .route("/schedules", post(publish_schedule))
}
