use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::notice::CreateNoticeRequest;
use crate::error::{Result, StorageError};
use crate::models::Notice;

/// Repository for Notice database operations
pub struct NoticeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> NoticeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Publish a notice
    pub async fn create(&self, req: &CreateNoticeRequest) -> Result<Notice> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            INSERT INTO notices (title, content, is_public, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING notice_id, title, content, publish_date, is_public, user_id
            "#,
        )
        .bind(&req.title)
        .bind(&req.content)
        .bind(req.is_public)
        .bind(req.user_id)
        .fetch_one(self.pool)
        .await?;

        Ok(notice)
    }

    /// Get a notice by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Notice> {
        let notice = sqlx::query_as::<_, Notice>(
            r#"
            SELECT notice_id, title, content, publish_date, is_public, user_id
            FROM notices
            WHERE notice_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(notice)
    }

    /// List public notices, newest first
    pub async fn list_public(&self, limit: i64) -> Result<Vec<Notice>> {
        let notices = sqlx::query_as::<_, Notice>(
            r#"
            SELECT notice_id, title, content, publish_date, is_public, user_id
            FROM notices
            WHERE is_public = TRUE
            ORDER BY publish_date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(notices)
    }

    /// List the notices a user can see on their dashboard: notices targeted
    /// at them plus public ones, newest first
    pub async fn list_for_user(&self, user_id: Uuid, limit: i64) -> Result<Vec<Notice>> {
        let notices = sqlx::query_as::<_, Notice>(
            r#"
            SELECT notice_id, title, content, publish_date, is_public, user_id
            FROM notices
            WHERE user_id = $1 OR is_public = TRUE
            ORDER BY publish_date DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(notices)
    }

    /// List all notices, newest first
    pub async fn list(&self) -> Result<Vec<Notice>> {
        let notices = sqlx::query_as::<_, Notice>(
            r#"
            SELECT notice_id, title, content, publish_date, is_public, user_id
            FROM notices
            ORDER BY publish_date DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(notices)
    }
}
