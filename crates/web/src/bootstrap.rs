use sqlx::PgPool;
use storage::dto::user::CreateUserRequest;
use storage::error::StorageError;
use storage::repository::user::UserRepository;

use crate::config::Config;
use crate::password;

/// Create the configured first admin if its username is absent. Losing the
/// insert race to another instance is fine; the account exists either way.
pub async fn ensure_bootstrap_admin(pool: &PgPool, config: &Config) -> anyhow::Result<()> {
    let (Some(username), Some(admin_password)) = (
        config.bootstrap_admin_username.as_deref(),
        config.bootstrap_admin_password.as_deref(),
    ) else {
        tracing::debug!("No bootstrap admin configured");
        return Ok(());
    };

    let repo = UserRepository::new(pool);

    if repo.find_by_username(username).await?.is_some() {
        tracing::debug!(username = %username, "Bootstrap admin already present");
        return Ok(());
    }

    let password_hash = password::hash_password(admin_password)?;
    let req = CreateUserRequest {
        username: username.to_string(),
        password: admin_password.to_string(),
        name: None,
        email: None,
        phone: None,
        team_name: None,
        province: None,
        is_admin: true,
    };

    match repo.create(&req, &password_hash).await {
        Ok(user) => {
            tracing::info!(user_id = %user.user_id, username = %username, "Bootstrap admin created");
            Ok(())
        }
        Err(StorageError::DuplicateUsername) => {
            tracing::debug!(username = %username, "Bootstrap admin created concurrently");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
