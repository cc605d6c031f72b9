use axum::{Json, extract::State};
use storage::dto::admin::AdminOverviewResponse;
use storage::dto::dashboard::DashboardResponse;

use crate::actor::CurrentActor;
use crate::app::AppState;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "The signed-in user's dashboard", body = DashboardResponse),
        (status = 401, description = "Session required")
    ),
    tag = "dashboard"
)]
pub async fn view_dashboard(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<DashboardResponse>, WebError> {
    let dashboard = services::view_dashboard(state.db.pool(), &actor).await?;

    Ok(Json(dashboard))
}

#[utoipa::path(
    get,
    path = "/api/admin/overview",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Every collection of the admin console", body = AdminOverviewResponse),
        (status = 401, description = "Admin session required")
    ),
    tag = "dashboard"
)]
pub async fn admin_overview(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> Result<Json<AdminOverviewResponse>, WebError> {
    let overview = services::admin_overview(state.db.pool(), &actor).await?;

    Ok(Json(overview))
}
