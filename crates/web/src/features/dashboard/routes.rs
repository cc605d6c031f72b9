use axum::{Router, routing::get};

use crate::app::AppState;

use super::handlers::{admin_overview, view_dashboard};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(view_dashboard))
        .route("/admin/overview", get(admin_overview))
}
