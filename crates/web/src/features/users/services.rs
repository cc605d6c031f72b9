use sqlx::PgPool;
use storage::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use storage::repository::user::UserRepository;
use uuid::Uuid;

use crate::actor::Actor;
use crate::error::WebResult;
use crate::password;
use crate::policy;

/// List all users; admins only
pub async fn list_users(pool: &PgPool, actor: &Actor) -> WebResult<Vec<UserResponse>> {
    policy::require_admin(actor)?;

    let users = UserRepository::new(pool).list().await?;

    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// Create a user; admins only. The credential is hashed before it touches
/// the store; a taken username fails with 409.
pub async fn create_user(
    pool: &PgPool,
    actor: &Actor,
    req: &CreateUserRequest,
) -> WebResult<UserResponse> {
    policy::require_admin(actor)?;

    let password_hash = password::hash_password(&req.password)?;

    let user = UserRepository::new(pool).create(req, &password_hash).await?;

    tracing::info!(user_id = %user.user_id, username = %user.username, "User created");

    Ok(UserResponse::from(user))
}

/// Update a user's profile, admin flag and optionally the password; admins only
pub async fn update_user(
    pool: &PgPool,
    actor: &Actor,
    id: Uuid,
    req: &UpdateUserRequest,
) -> WebResult<UserResponse> {
    policy::require_admin(actor)?;

    let password_hash = match &req.password {
        Some(new_password) => Some(password::hash_password(new_password)?),
        None => None,
    };

    let user = UserRepository::new(pool)
        .update(id, req, password_hash.as_deref())
        .await?;

    Ok(UserResponse::from(user))
}
