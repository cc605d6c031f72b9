use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::dto::competition::CompetitionResponse;
use crate::forms::{self, Submission};
use crate::models::{Competition, Registration};

/// Request payload for registering for a competition.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitRegistrationRequest {
    /// Field name -> submitted value, one entry per form field.
    #[schema(value_type = Object)]
    pub form: Submission,
}

/// Request payload for triaging a registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRegistrationStatusRequest {
    /// One of `pending`, `confirmed`, `rejected`.
    #[validate(length(min = 1, max = 20))]
    pub status: String,
}

/// Response containing registration details, with the submission decoded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Option<Uuid>,
    #[schema(value_type = Object)]
    pub form_data: Submission,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        RegistrationResponse {
            registration_id: registration.registration_id,
            competition_id: registration.competition_id,
            user_id: registration.user_id,
            form_data: forms::parse_submission(&registration.form_data),
            status: registration.status,
            created_at: registration.created_at,
        }
    }
}

/// Registration joined with the competition it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationDetailResponse {
    pub registration: RegistrationResponse,
    pub competition: CompetitionResponse,
}

impl RegistrationDetailResponse {
    pub fn new(registration: Registration, competition: Competition) -> Self {
        RegistrationDetailResponse {
            registration: RegistrationResponse::from(registration),
            competition: CompetitionResponse::from(competition),
        }
    }
}
