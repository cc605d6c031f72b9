use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::schedule::CreateScheduleRequest;
use storage::models::Schedule;
use validator::Validate;

use crate::actor::CurrentActor;
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/schedules",
    request_body = CreateScheduleRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Schedule entry published", body = Schedule),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required")
    ),
    tag = "schedules"
)]
pub async fn publish_schedule(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateScheduleRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_times()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let schedule = services::publish_schedule(state.db.pool(), &actor, &req).await?;

    Ok((StatusCode::CREATED, Json(schedule)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/schedules",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All schedule entries, chronological", body = Vec<Schedule>),
        (status = 401, description = "Admin session required")
    ),
    tag = "schedules"
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<Vec<Schedule>>, WebError> {
    let schedules = services::list_schedules(state.db.pool(), &actor).await?;

    Ok(Json(schedules))
}
