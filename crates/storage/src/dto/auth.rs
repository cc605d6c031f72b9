use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 80, message = "Username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, max = 120, message = "Password must not be empty"))]
    pub password: String,
}

/// Session descriptor returned on successful login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    /// Opaque bearer token; send as `Authorization: Bearer <token>`.
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
    pub is_admin: bool,
}
