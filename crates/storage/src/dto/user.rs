use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::User;

/// Request payload for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 80,
        message = "Username must be between 1 and 80 characters"
    ))]
    pub username: String,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Password must be between 1 and 120 characters"
    ))]
    pub password: String,

    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub team_name: Option<String>,

    #[validate(length(max = 50))]
    pub province: Option<String>,

    #[serde(default)]
    pub is_admin: bool,
}

/// Request payload for updating an existing user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 100))]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 100))]
    pub team_name: Option<String>,

    #[validate(length(max = 50))]
    pub province: Option<String>,

    pub is_admin: Option<bool>,

    /// When present, replaces the user's password.
    #[validate(length(min = 1, max = 120))]
    pub password: Option<String>,
}

/// Response containing user details; never carries the credential.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub team_name: Option<String>,
    pub province: Option<String>,
    pub is_admin: bool,
    pub created_at: chrono::NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            user_id: user.user_id,
            username: user.username,
            name: user.name,
            email: user.email,
            phone: user.phone,
            team_name: user.team_name,
            province: user.province,
            is_admin: user.is_admin,
            created_at: user.created_at,
        }
    }
}
