use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for publishing a schedule entry
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateScheduleRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "Content must not be empty"))]
    pub content: String,

    pub start_time: chrono::NaiveDateTime,

    pub end_time: chrono::NaiveDateTime,

    /// The user the entry is scheduled for.
    pub user_id: Uuid,

    pub competition_id: Option<Uuid>,
}

impl CreateScheduleRequest {
    pub fn validate_times(&self) -> Result<(), String> {
        if self.start_time > self.end_time {
            return Err("start_time must not be after end_time".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_times() {
        let req = CreateScheduleRequest {
            title: "Opening ceremony".to_string(),
            content: "Main hall".to_string(),
            start_time: "2026-09-02T10:00:00".parse().unwrap(),
            end_time: "2026-09-01T10:00:00".parse().unwrap(),
            user_id: Uuid::new_v4(),
            competition_id: None,
        };
        assert!(req.validate_times().is_err());
    }
}
