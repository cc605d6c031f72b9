use axum::{
    Router,
    routing::{get, post, put},
};

use crate::app::AppState;

use super::handlers::{
    create_competition, get_competition, list_competitions, update_competition,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/competitions", get(list_competitions))
        .route("/competitions", post(create_competition))
        .route("/competitions/:id", get(get_competition))
        .route("/competitions/:id", put(update_competition))
}
