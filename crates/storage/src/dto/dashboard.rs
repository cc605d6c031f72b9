use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::user::UserResponse;
use crate::models::{Notice, Schedule};

/// A registration row joined with its competition, for dashboard listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationSummary {
    pub registration_id: Uuid,
    pub competition_id: Uuid,
    pub competition_title: String,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Everything a signed-in user's dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub user: UserResponse,
    /// Own schedule entries, chronological.
    pub schedules: Vec<Schedule>,
    /// Targeted and public notices, newest first, capped.
    pub notices: Vec<Notice>,
    /// Own registrations joined with their competitions.
    pub registrations: Vec<RegistrationSummary>,
}
