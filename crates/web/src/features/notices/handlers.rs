use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::common::LimitParams;
use storage::dto::notice::CreateNoticeRequest;
use storage::models::Notice;
use uuid::Uuid;
use validator::Validate;

use crate::actor::{CurrentActor, MaybeActor};
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/notices",
    params(LimitParams),
    responses(
        (status = 200, description = "Public notices, newest first", body = Vec<Notice>)
    ),
    tag = "notices"
)]
pub async fn list_public_notices(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<Notice>>, WebError> {
    let notices = services::list_public_notices(state.db.pool(), params.limit()).await?;

    Ok(Json(notices))
}

#[utoipa::path(
    get,
    path = "/api/notices/{id}",
    params(
        ("id" = Uuid, Path, description = "Notice ID")
    ),
    responses(
        (status = 200, description = "Notice found", body = Notice),
        (status = 401, description = "Notice is targeted at another user"),
        (status = 404, description = "Notice not found")
    ),
    tag = "notices"
)]
pub async fn get_notice(
    State(state): State<AppState>,
    MaybeActor(actor): MaybeActor,
    Path(id): Path<Uuid>,
) -> Result<Json<Notice>, WebError> {
    let notice = services::get_notice(state.db.pool(), id, &actor).await?;

    Ok(Json(notice))
}

#[utoipa::path(
    post,
    path = "/api/notices",
    request_body = CreateNoticeRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Notice published", body = Notice),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin session required")
    ),
    tag = "notices"
)]
pub async fn publish_notice(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Json(req): Json<CreateNoticeRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let notice = services::publish_notice(state.db.pool(), &actor, &req).await?;

    Ok((StatusCode::CREATED, Json(notice)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/notices",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "All notices, newest first", body = Vec<Notice>),
        (status = 401, description = "Admin session required")
    ),
    tag = "notices"
)]
pub async fn list_all_notices(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<Vec<Notice>>, WebError> {
    let notices = services::list_all_notices(state.db.pool(), &actor).await?;

    Ok(Json(notices))
}
