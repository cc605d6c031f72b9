use sqlx::PgPool;
use storage::dto::admin::AdminOverviewResponse;
use storage::dto::competition::CompetitionResponse;
use storage::dto::dashboard::DashboardResponse;
use storage::dto::registration::RegistrationResponse;
use storage::dto::user::UserResponse;
use storage::repository::competition::CompetitionRepository;
use storage::repository::notice::NoticeRepository;
use storage::repository::registration::RegistrationRepository;
use storage::repository::schedule::ScheduleRepository;
use storage::repository::user::UserRepository;

use crate::actor::Actor;
use crate::error::{WebError, WebResult};
use crate::policy;

const DASHBOARD_NOTICE_LIMIT: i64 = 10;

/// Everything a signed-in user's dashboard shows: own schedules in
/// chronological order, targeted plus public notices newest first, and own
/// registrations joined with their competitions.
pub async fn view_dashboard(pool: &PgPool, actor: &Actor) -> WebResult<DashboardResponse> {
    let user_id = actor.user_id().ok_or(WebError::Unauthorized)?;

    let user = UserRepository::new(pool).find_by_id(user_id).await?;
    let schedules = ScheduleRepository::new(pool).list_by_user(user_id).await?;
    let notices = NoticeRepository::new(pool)
        .list_for_user(user_id, DASHBOARD_NOTICE_LIMIT)
        .await?;
    let registrations = RegistrationRepository::new(pool)
        .list_summaries_for_user(user_id)
        .await?;

    Ok(DashboardResponse {
        user: UserResponse::from(user),
        schedules,
        notices,
        registrations,
    })
}

/// The admin console overview: every collection in one payload; admins only
pub async fn admin_overview(pool: &PgPool, actor: &Actor) -> WebResult<AdminOverviewResponse> {
    policy::require_admin(actor)?;

    let users = UserRepository::new(pool).list().await?;
    let competitions = CompetitionRepository::new(pool).list().await?;
    let notices = NoticeRepository::new(pool).list().await?;
    let schedules = ScheduleRepository::new(pool).list().await?;
    let registrations = RegistrationRepository::new(pool).list().await?;

    Ok(AdminOverviewResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        competitions: competitions
            .into_iter()
            .map(CompetitionResponse::from)
            .collect(),
        notices,
        schedules,
        registrations: registrations
            .into_iter()
            .map(RegistrationResponse::from)
            .collect(),
    })
}
