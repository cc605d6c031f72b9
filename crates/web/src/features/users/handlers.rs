use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use uuid::Uuid;
use validator::Validate;

use crate::actor::CurrentActor;
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/users",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
        (status = 401, description = "Admin session required")
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<Vec<UserResponse>>, WebError> {
    let users = services::list_users(state.db.pool(), &actor).await?;

    Ok(Json(users))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required"),
        (status = 409, description = "Username already taken")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(state.db.pool(), &actor, &req).await?;

    Ok((StatusCode::CREATED, Json(user)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, WebError> {
    req.validate()?;

    let user = services::update_user(state.db.pool(), &actor, id, &req).await?;

    Ok(Json(user))
}
