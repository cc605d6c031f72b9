use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Session, User};

/// Repository for session-token database operations. Tokens are stored only
/// as digests; the caller hashes before lookup.
pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a user
    pub async fn create(
        &self,
        user_id: Uuid,
        token_hash: &str,
        expires_at: chrono::NaiveDateTime,
    ) -> Result<Session> {
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (user_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            RETURNING session_id, user_id, token_hash, created_at, expires_at
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// Resolve an unexpired session token to its user
    pub async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.user_id, u.username, u.password_hash, u.name, u.email, u.phone,
                   u.team_name, u.province, u.is_admin, u.created_at
            FROM sessions s
            INNER JOIN users u ON s.user_id = u.user_id
            WHERE s.token_hash = $1 AND s.expires_at > (now() AT TIME ZONE 'utc')
            "#,
        )
        .bind(token_hash)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Delete the session behind a token; logging out twice is not an error
    pub async fn delete_by_token_hash(&self, token_hash: &str) -> Result<()> {
        sqlx::query("DELETE FROM sessions WHERE token_hash = $1")
            .bind(token_hash)
            .execute(self.pool)
            .await?;

        Ok(())
    }

    /// Drop sessions past their expiry
    pub async fn delete_expired(&self) -> Result<u64> {
        let result =
            sqlx::query("DELETE FROM sessions WHERE expires_at <= (now() AT TIME ZONE 'utc')")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
