use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub competition_id: Uuid,
    pub user_id: Option<Uuid>,
    /// JSON document: field name -> submitted value.
    pub form_data: String,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Triage state of a registration. Stored as text; parsing is the only
/// accepted way to produce a value, so unknown statuses never reach the
/// database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl RegistrationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "pending",
            RegistrationStatus::Confirmed => "confirmed",
            RegistrationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RegistrationStatus::Pending),
            "confirmed" => Ok(RegistrationStatus::Confirmed),
            "rejected" => Ok(RegistrationStatus::Rejected),
            other => Err(format!("Invalid registration status: {}", other)),
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exactly_the_three_statuses() {
        assert_eq!(
            "pending".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Pending
        );
        assert_eq!(
            "confirmed".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Confirmed
        );
        assert_eq!(
            "rejected".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Rejected
        );
        assert!("approved".parse::<RegistrationStatus>().is_err());
        assert!("PENDING".parse::<RegistrationStatus>().is_err());
        assert!("".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn round_trips_through_display() {
        for status in [
            RegistrationStatus::Pending,
            RegistrationStatus::Confirmed,
            RegistrationStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<RegistrationStatus>(), Ok(status));
        }
    }
}
