use axum::{
    Router,
    routing::{get, post},
};

use crate::app::AppState;

use super::handlers::{get_notice, list_all_notices, list_public_notices, publish_notice};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notices", get(list_public_notices))
        .route("/notices", post(publish_notice))
        .route("/notices/:id", get(get_notice))
        .route("/admin/notices", get(list_all_notices))
}
