use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notice {
    pub notice_id: Uuid,
    pub title: String,
    pub content: String,
    pub publish_date: chrono::NaiveDateTime,
    pub is_public: bool,
    /// Target user for non-public notices.
    pub user_id: Option<Uuid>,
}
