use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::dashboard::RegistrationSummary;
use crate::error::{Result, StorageError};
use crate::models::{Registration, RegistrationStatus};

#[derive(FromRow)]
struct SummaryRow {
    registration_id: Uuid,
    competition_id: Uuid,
    competition_title: String,
    status: String,
    created_at: chrono::NaiveDateTime,
}

impl From<SummaryRow> for RegistrationSummary {
    fn from(row: SummaryRow) -> Self {
        RegistrationSummary {
            registration_id: row.registration_id,
            competition_id: row.competition_id,
            competition_title: row.competition_title,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Repository for Registration database operations
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new pending registration. `user_id` is absent for anonymous
    /// submissions.
    pub async fn create(
        &self,
        competition_id: Uuid,
        user_id: Option<Uuid>,
        form_data: &str,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (competition_id, user_id, form_data, status)
            VALUES ($1, $2, $3, $4)
            RETURNING registration_id, competition_id, user_id, form_data, status, created_at
            "#,
        )
        .bind(competition_id)
        .bind(user_id)
        .bind(form_data)
        .bind(RegistrationStatus::Pending.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(registration)
    }

    /// Get a registration by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, competition_id, user_id, form_data, status, created_at
            FROM registrations
            WHERE registration_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// List all registrations, newest first
    pub async fn list(&self) -> Result<Vec<Registration>> {
        let registrations = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, competition_id, user_id, form_data, status, created_at
            FROM registrations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(registrations)
    }

    /// List a user's registrations joined with their competitions
    pub async fn list_summaries_for_user(&self, user_id: Uuid) -> Result<Vec<RegistrationSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT r.registration_id, r.competition_id, c.title AS competition_title,
                   r.status, r.created_at
            FROM registrations r
            INNER JOIN competitions c ON r.competition_id = c.competition_id
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(RegistrationSummary::from).collect())
    }

    /// Set a registration's triage status
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RegistrationStatus,
    ) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            UPDATE registrations
            SET status = $2
            WHERE registration_id = $1
            RETURNING registration_id, competition_id, user_id, form_data, status, created_at
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }
}
