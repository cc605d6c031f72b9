use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for publishing a notice
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNoticeRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    #[serde(default = "default_is_public")]
    pub is_public: bool,

    /// Target user; required when the notice is not public.
    pub user_id: Option<Uuid>,
}

fn default_is_public() -> bool {
    true
}
