use sqlx::PgPool;
use storage::dto::schedule::CreateScheduleRequest;
use storage::models::Schedule;
use storage::repository::schedule::ScheduleRepository;

use crate::actor::Actor;
use crate::error::WebResult;
use crate::policy;

/// Publish a schedule entry for a user; admins only
pub async fn publish_schedule(
    pool: &PgPool,
    actor: &Actor,
    req: &CreateScheduleRequest,
) -> WebResult<Schedule> {
    policy::require_admin(actor)?;

    let schedule = ScheduleRepository::new(pool).create(req).await?;

    tracing::info!(
        schedule_id = %schedule.schedule_id,
        user_id = %schedule.user_id,
        "Schedule entry published"
    );

    Ok(schedule)
}

/// List every schedule entry; admins only
pub async fn list_schedules(pool: &PgPool, actor: &Actor) -> WebResult<Vec<Schedule>> {
    policy::require_admin(actor)?;

    let repo = ScheduleRepository::new(pool);
    Ok(repo.list().await?)
}
