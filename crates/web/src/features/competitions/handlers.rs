use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::competition::{
    CompetitionResponse, CreateCompetitionRequest, UpdateCompetitionRequest,
};
use uuid::Uuid;
use validator::Validate;

use crate::actor::CurrentActor;
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions",
    responses(
        (status = 200, description = "List all competitions, newest start date first", body = Vec<CompetitionResponse>)
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompetitionResponse>>, WebError> {
    let competitions = services::list_competitions(state.db.pool()).await?;

    let response: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/competitions/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionResponse),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn get_competition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let competition = services::get_competition(state.db.pool(), id).await?;

    Ok(Json(CompetitionResponse::from(competition)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions",
    request_body = CreateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Competition created successfully", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_dates()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let competition = services::create_competition(
        state.db.pool(),
        &actor,
        &req,
        state.config.max_form_fields,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitionResponse::from(competition)),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitions/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition ID")
    ),
    request_body = UpdateCompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition updated successfully", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn update_competition(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let updated = services::update_competition(
        state.db.pool(),
        &actor,
        id,
        &req,
        state.config.max_form_fields,
    )
    .await?;

    Ok(Json(CompetitionResponse::from(updated)).into_response())
}
