use axum::{
    Router,
    routing::{get, post, put},
};

use crate::app::AppState;

use super::handlers::{create_user, list_users, update_user};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/:id", put(update_user))
}
