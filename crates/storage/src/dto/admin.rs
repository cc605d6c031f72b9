use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::competition::CompetitionResponse;
use crate::dto::registration::RegistrationResponse;
use crate::dto::user::UserResponse;
use crate::models::{Notice, Schedule};

/// The admin console overview: every collection in one payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminOverviewResponse {
    pub users: Vec<UserResponse>,
    pub competitions: Vec<CompetitionResponse>,
    pub notices: Vec<Notice>,
    pub schedules: Vec<Schedule>,
    pub registrations: Vec<RegistrationResponse>,
}
