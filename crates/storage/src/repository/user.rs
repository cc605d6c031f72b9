use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::{CreateUserRequest, UpdateUserRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

/// Repository for User database operations
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users, oldest first
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, password_hash, name, email, phone,
                   team_name, province, is_admin, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, password_hash, name, email, phone,
                   team_name, province, is_admin, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    /// Get a user by exact username, if one exists
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, password_hash, name, email, phone,
                   team_name, province, is_admin, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Create a new user. The unique index on username makes concurrent
    /// inserts of the same name race safely; the loser gets
    /// `DuplicateUsername`.
    pub async fn create(&self, req: &CreateUserRequest, password_hash: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, name, email, phone,
                               team_name, province, is_admin)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING user_id, username, password_hash, name, email, phone,
                      team_name, province, is_admin, created_at
            "#,
        )
        .bind(&req.username)
        .bind(password_hash)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.team_name)
        .bind(&req.province)
        .bind(req.is_admin)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::DuplicateUsername;
                }
            }
            StorageError::from(e)
        })?;

        Ok(user)
    }

    /// Update an existing user; absent fields keep their current value
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateUserRequest,
        password_hash: Option<&str>,
    ) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                team_name = COALESCE($5, team_name),
                province = COALESCE($6, province),
                is_admin = COALESCE($7, is_admin),
                password_hash = COALESCE($8, password_hash)
            WHERE user_id = $1
            RETURNING user_id, username, password_hash, name, email, phone,
                      team_name, province, is_admin, created_at
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.team_name)
        .bind(&req.province)
        .bind(req.is_admin)
        .bind(password_hash)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(user)
    }
}
