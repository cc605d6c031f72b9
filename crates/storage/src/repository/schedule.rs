use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::schedule::CreateScheduleRequest;
use crate::error::Result;
use crate::models::Schedule;

/// Repository for Schedule database operations
pub struct ScheduleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Publish a schedule entry for a user
    pub async fn create(&self, req: &CreateScheduleRequest) -> Result<Schedule> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (title, content, start_time, end_time, user_id, competition_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING schedule_id, title, content, start_time, end_time, user_id, competition_id
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.start_time)
        .bind(req.end_time)
        .bind(req.user_id)
        .bind(req.competition_id)
        .fetch_one(self.pool)
        .await?;

        Ok(schedule)
    }

    /// List a user's schedule entries, chronological
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Schedule>> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, title, content, start_time, end_time, user_id, competition_id
            FROM schedules
            WHERE user_id = $1
            ORDER BY start_time
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(schedules)
    }

    /// List all schedule entries, chronological
    pub async fn list(&self) -> Result<Vec<Schedule>> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT schedule_id, title, content, start_time, end_time, user_id, competition_id
            FROM schedules
            ORDER BY start_time
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(schedules)
    }
}
