use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::forms::{FieldDefinition, FieldKind};
use crate::models::Competition;

/// One row of the competition form builder: name + type, a required flag and,
/// for select fields, a comma-separated options string.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct FieldDefinitionRow {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Field name must be between 1 and 100 characters"
    ))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(custom(function = "validate_field_type"))]
    pub field_type: String,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
}

impl From<FieldDefinitionRow> for FieldDefinition {
    fn from(row: FieldDefinitionRow) -> Self {
        FieldDefinition {
            kind: FieldKind::from_parts(&row.field_type, row.options.as_deref()),
            name: row.name,
            required: row.required,
        }
    }
}

impl From<FieldDefinition> for FieldDefinitionRow {
    fn from(field: FieldDefinition) -> Self {
        FieldDefinitionRow {
            field_type: field.kind.type_name().to_string(),
            options: match &field.kind {
                FieldKind::Select { options } => Some(options.join(",")),
                _ => None,
            },
            name: field.name,
            required: field.required,
        }
    }
}

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    pub start_date: chrono::NaiveDateTime,

    pub end_date: chrono::NaiveDateTime,

    #[validate(nested)]
    #[serde(default)]
    pub fields: Vec<FieldDefinitionRow>,
}

impl CreateCompetitionRequest {
    /// Competitions must not end before they start.
    pub fn validate_dates(&self) -> Result<(), String> {
        if self.start_date > self.end_date {
            return Err("start_date must not be after end_date".to_string());
        }
        Ok(())
    }

    pub fn field_definitions(&self) -> Vec<FieldDefinition> {
        rows_to_definitions(&self.fields)
    }
}

/// Rows with an empty name or type are skipped; select options are split out
/// of their raw string.
pub fn rows_to_definitions(rows: &[FieldDefinitionRow]) -> Vec<FieldDefinition> {
    rows.iter()
        .filter(|row| !row.name.trim().is_empty() && !row.field_type.trim().is_empty())
        .cloned()
        .map(FieldDefinition::from)
        .collect()
}

/// Request payload for updating an existing competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub start_date: Option<chrono::NaiveDateTime>,

    pub end_date: Option<chrono::NaiveDateTime>,

    #[validate(nested)]
    pub fields: Option<Vec<FieldDefinitionRow>>,
}

/// Response containing competition details, with the form schema decoded.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub competition_id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: chrono::NaiveDateTime,
    pub end_date: chrono::NaiveDateTime,
    pub form_fields: Vec<FieldDefinitionRow>,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Competition> for CompetitionResponse {
    fn from(competition: Competition) -> Self {
        let form_fields = crate::forms::parse_schema(&competition.form_fields)
            .into_iter()
            .map(FieldDefinitionRow::from)
            .collect();

        CompetitionResponse {
            competition_id: competition.competition_id,
            title: competition.title,
            description: competition.description,
            start_date: competition.start_date,
            end_date: competition.end_date,
            form_fields,
            created_at: competition.created_at,
        }
    }
}

// Validation helpers
fn validate_field_type(field_type: &str) -> Result<(), validator::ValidationError> {
    const VALID_TYPES: &[&str] = &["text", "textarea", "number", "select"];

    if VALID_TYPES.contains(&field_type) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_field_type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(fields: Vec<FieldDefinitionRow>) -> CreateCompetitionRequest {
        CreateCompetitionRequest {
            title: "Robotics Cup".to_string(),
            description: "Annual robotics tournament".to_string(),
            start_date: "2026-09-01T09:00:00".parse().unwrap(),
            end_date: "2026-09-02T18:00:00".parse().unwrap(),
            fields,
        }
    }

    #[test]
    fn rejects_unknown_field_type() {
        let row = FieldDefinitionRow {
            name: "team".to_string(),
            field_type: "checkbox".to_string(),
            required: true,
            options: None,
        };
        assert!(request(vec![row]).validate().is_err());
    }

    #[test]
    fn rejects_reversed_dates() {
        let mut req = request(vec![]);
        std::mem::swap(&mut req.start_date, &mut req.end_date);
        assert!(req.validate_dates().is_err());
    }

    #[test]
    fn builds_definitions_and_skips_blank_rows() {
        let rows = vec![
            FieldDefinitionRow {
                name: "team".to_string(),
                field_type: "text".to_string(),
                required: true,
                options: None,
            },
            FieldDefinitionRow {
                name: "".to_string(),
                field_type: "text".to_string(),
                required: false,
                options: None,
            },
            FieldDefinitionRow {
                name: "division".to_string(),
                field_type: "select".to_string(),
                required: false,
                options: Some("junior, senior".to_string()),
            },
        ];
        let defs = request(rows).field_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, "team");
        assert_eq!(
            defs[1].kind,
            FieldKind::Select {
                options: vec!["junior".to_string(), "senior".to_string()],
            }
        );
    }

    #[test]
    fn response_decodes_stored_schema() {
        let competition = Competition {
            competition_id: Uuid::new_v4(),
            title: "Robotics Cup".to_string(),
            description: "desc".to_string(),
            start_date: "2026-09-01T09:00:00".parse().unwrap(),
            end_date: "2026-09-02T18:00:00".parse().unwrap(),
            form_fields: r#"[{"name":"team","type":"text","required":true}]"#.to_string(),
            created_at: "2026-08-01T00:00:00".parse().unwrap(),
        };
        let response = CompetitionResponse::from(competition);
        assert_eq!(response.form_fields.len(), 1);
        assert_eq!(response.form_fields[0].name, "team");
        assert!(response.form_fields[0].required);
    }
}
