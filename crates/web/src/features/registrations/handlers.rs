use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::registration::{
    RegistrationDetailResponse, RegistrationResponse, SubmitRegistrationRequest,
    UpdateRegistrationStatusRequest,
};
use uuid::Uuid;

use crate::actor::{CurrentActor, MaybeActor};
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitions/{id}/registrations",
    params(
        ("id" = Uuid, Path, description = "Competition ID")
    ),
    request_body = SubmitRegistrationRequest,
    responses(
        (status = 201, description = "Registration created as pending", body = RegistrationResponse),
        (status = 400, description = "Submission does not satisfy the form schema"),
        (status = 404, description = "Competition not found")
    ),
    tag = "registrations"
)]
pub async fn submit_registration(
    State(state): State<AppState>,
    MaybeActor(actor): MaybeActor,
    Path(id): Path<Uuid>,
    Json(req): Json<SubmitRegistrationRequest>,
) -> Result<Response, WebError> {
    let registration = services::register(state.db.pool(), id, &req.form, &actor).await?;

    Ok((StatusCode::CREATED, Json(registration)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Registration with its competition", body = RegistrationDetailResponse),
        (status = 401, description = "Not the owner and not an admin"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<Uuid>,
) -> Result<Json<RegistrationDetailResponse>, WebError> {
    let detail = services::view_registration(state.db.pool(), id, &actor).await?;

    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/api/registrations/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status updated", body = RegistrationResponse),
        (status = 400, description = "Not one of pending, confirmed, rejected"),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn update_registration_status(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRegistrationStatusRequest>,
) -> Result<Json<RegistrationResponse>, WebError> {
    let registration =
        services::triage_registration(state.db.pool(), id, &req.status, &actor).await?;

    Ok(Json(registration))
}

#[utoipa::path(
    get,
    path = "/api/registrations",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All registrations, newest first", body = Vec<RegistrationResponse>),
        (status = 401, description = "Admin session required")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<Vec<RegistrationResponse>>, WebError> {
    let registrations = services::list_registrations(state.db.pool(), &actor).await?;

    Ok(Json(registrations))
}
