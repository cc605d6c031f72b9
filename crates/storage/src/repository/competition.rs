use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::competition::{CreateCompetitionRequest, UpdateCompetitionRequest};
use crate::error::{Result, StorageError};
use crate::models::Competition;

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all competitions, newest start date first
    pub async fn list(&self) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT competition_id, title, description, start_date, end_date,
                   form_fields, created_at
            FROM competitions
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    /// Get a competition by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT competition_id, title, description, start_date, end_date,
                   form_fields, created_at
            FROM competitions
            WHERE competition_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Create a new competition with its serialized form schema
    pub async fn create(
        &self,
        req: &CreateCompetitionRequest,
        form_fields: &str,
    ) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (title, description, start_date, end_date, form_fields)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING competition_id, title, description, start_date, end_date,
                      form_fields, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(form_fields)
        .fetch_one(self.pool)
        .await?;

        Ok(competition)
    }

    /// Update an existing competition; absent fields keep their current value
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateCompetitionRequest,
        form_fields: Option<&str>,
    ) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            UPDATE competitions
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                start_date = COALESCE($4, start_date),
                end_date = COALESCE($5, end_date),
                form_fields = COALESCE($6, form_fields)
            WHERE competition_id = $1
            RETURNING competition_id, title, description, start_date, end_date,
                      form_fields, created_at
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(form_fields)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }
}
