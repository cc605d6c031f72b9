use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use storage::dto::auth::{LoginRequest, SessionResponse};
use validator::Validate;

use crate::actor;
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated; the returned token goes in the Authorization header", body = SessionResponse),
        (status = 401, description = "Invalid username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, WebError> {
    req.validate()?;

    let session = services::login(state.db.pool(), &req, state.config.session_ttl_hours).await?;

    Ok(Json(session))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Session ended")
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, WebError> {
    if let Some(token) = actor::bearer_token(&headers) {
        services::logout(state.db.pool(), token).await?;
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
