use axum::{Router, routing::post};

use crate::app::AppState;

use super::handlers::{login, logout};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}
