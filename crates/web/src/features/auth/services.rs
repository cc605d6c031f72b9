use sqlx::PgPool;
use storage::dto::auth::{LoginRequest, SessionResponse};
use storage::repository::session::SessionRepository;
use storage::repository::user::UserRepository;

use crate::actor::{generate_session_token, token_digest};
use crate::error::{WebError, WebResult};
use crate::password::{self, PasswordError};

/// Authenticate by exact username and password. Unknown usernames and
/// mismatched passwords fail identically.
pub async fn login(
    pool: &PgPool,
    req: &LoginRequest,
    session_ttl_hours: i64,
) -> WebResult<SessionResponse> {
    let user = UserRepository::new(pool)
        .find_by_username(&req.username)
        .await?
        .ok_or(WebError::InvalidCredentials)?;

    let matches = match password::verify_password(&req.password, &user.password_hash) {
        Ok(matches) => matches,
        // A row whose hash does not parse can never authenticate.
        Err(PasswordError::InvalidHashFormat) => false,
        Err(e) => return Err(e.into()),
    };

    if !matches {
        return Err(WebError::InvalidCredentials);
    }

    let token = generate_session_token();
    let expires_at = chrono::Utc::now().naive_utc() + chrono::Duration::hours(session_ttl_hours);

    SessionRepository::new(pool)
        .create(user.user_id, &token_digest(&token), expires_at)
        .await?;

    tracing::info!(user_id = %user.user_id, username = %user.username, "User logged in");

    Ok(SessionResponse {
        token,
        user_id: user.user_id,
        username: user.username,
        is_admin: user.is_admin,
    })
}

/// Drop the session behind the presented token.
pub async fn logout(pool: &PgPool, token: &str) -> WebResult<()> {
    SessionRepository::new(pool)
        .delete_by_token_hash(&token_digest(token))
        .await?;

    Ok(())
}
