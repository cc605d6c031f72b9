use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A submitted form: field name -> value, in submission order.
pub type Submission = Map<String, Value>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Value '{value}' is not an option of field {field}")]
    InvalidOptionValue { field: String, value: String },
}

/// The kind of input a field renders as and validates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Select { options: Vec<String> },
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Number => "number",
            FieldKind::Select { .. } => "select",
        }
    }

    /// Build a kind from its wire name and the raw comma-separated options
    /// string. Unknown type names decode as `Text` so rows written by older
    /// versions stay readable.
    pub fn from_parts(type_name: &str, options: Option<&str>) -> Self {
        match type_name {
            "textarea" => FieldKind::TextArea,
            "number" => FieldKind::Number,
            "select" => FieldKind::Select {
                options: split_options(options.unwrap_or_default()),
            },
            _ => FieldKind::Text,
        }
    }
}

pub fn split_options(options: &str) -> Vec<String> {
    options
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// One named, typed slot in a competition's registration form.
///
/// Persisted as `{"name": .., "type": .., "required": .., "options": ".."}`
/// with `options` present only for select fields, as a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawField", into = "RawField")]
pub struct FieldDefinition {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Serialize, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    options: Option<String>,
}

impl From<RawField> for FieldDefinition {
    fn from(raw: RawField) -> Self {
        FieldDefinition {
            kind: FieldKind::from_parts(&raw.field_type, raw.options.as_deref()),
            name: raw.name,
            required: raw.required,
        }
    }
}

impl From<FieldDefinition> for RawField {
    fn from(field: FieldDefinition) -> Self {
        RawField {
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

/// Validate a submission against a schema.
///
/// Every required field must carry a non-empty value, and select values must
/// be one of the declared options. Fields the schema does not declare are
/// passed through unchanged, appended after the declared fields, so the
/// returned map always leads with the schema's field order.
pub fn validate(schema: &[FieldDefinition], submission: &Submission) -> Result<Submission, FormError> {
    let mut normalized = Map::new();

    for field in schema {
        let value = submission
            .get(&field.name)
            .and_then(Value::as_str)
            .unwrap_or("");

        if field.required && value.trim().is_empty() {
            return Err(FormError::MissingRequiredField(field.name.clone()));
        }

        if let FieldKind::Select { options } = &field.kind {
            if !value.is_empty() && !options.iter().any(|o| o == value) {
                return Err(FormError::InvalidOptionValue {
                    field: field.name.clone(),
                    value: value.to_string(),
                });
            }
        }

        normalized.insert(field.name.clone(), Value::String(value.to_string()));
    }

    for (name, value) in submission {
        if !normalized.contains_key(name) {
            normalized.insert(name.clone(), value.clone());
        }
    }

    Ok(normalized)
}

/// Decode a stored schema document. Corrupt text decodes to the empty schema.
pub fn parse_schema(raw: &str) -> Vec<FieldDefinition> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Decode a stored submission document. Corrupt text decodes to the empty map.
pub fn parse_submission(raw: &str) -> Submission {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn schema_to_json(schema: &[FieldDefinition]) -> String {
    serde_json::to_string(schema).unwrap_or_else(|_| "[]".to_string())
}

pub fn submission_to_json(submission: &Submission) -> String {
    serde_json::to_string(submission).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(name: &str, required: bool) -> FieldDefinition {
        FieldDefinition {
            name: name.to_string(),
            required,
            kind: FieldKind::Text,
        }
    }

    fn submission(pairs: &[(&str, &str)]) -> Submission {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn accepts_submission_with_all_required_fields() {
        let schema = vec![text_field("team", true)];
        let normalized = validate(&schema, &submission(&[("team", "Falcons")])).unwrap();
        assert_eq!(normalized["team"], "Falcons");
    }

    #[test]
    fn rejects_missing_required_field() {
        let schema = vec![text_field("team", true)];
        let err = validate(&schema, &submission(&[])).unwrap_err();
        assert_eq!(err, FormError::MissingRequiredField("team".to_string()));
    }

    #[test]
    fn rejects_blank_required_field() {
        let schema = vec![text_field("team", true)];
        let err = validate(&schema, &submission(&[("team", "   ")])).unwrap_err();
        assert_eq!(err, FormError::MissingRequiredField("team".to_string()));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let schema = vec![text_field("coach", false)];
        let normalized = validate(&schema, &submission(&[])).unwrap();
        assert_eq!(normalized["coach"], "");
    }

    #[test]
    fn rejects_undeclared_select_option() {
        let schema = vec![FieldDefinition {
            name: "division".to_string(),
            required: true,
            kind: FieldKind::Select {
                options: vec!["junior".to_string(), "senior".to_string()],
            },
        }];
        let err = validate(&schema, &submission(&[("division", "open")])).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidOptionValue {
                field: "division".to_string(),
                value: "open".to_string(),
            }
        );
    }

    #[test]
    fn accepts_declared_select_option() {
        let schema = vec![FieldDefinition {
            name: "division".to_string(),
            required: true,
            kind: FieldKind::Select {
                options: vec!["junior".to_string(), "senior".to_string()],
            },
        }];
        let normalized = validate(&schema, &submission(&[("division", "senior")])).unwrap();
        assert_eq!(normalized["division"], "senior");
    }

    #[test]
    fn undeclared_fields_pass_through_after_schema_order() {
        let schema = vec![text_field("team", true), text_field("coach", false)];
        let normalized = validate(
            &schema,
            &submission(&[("extra", "note"), ("team", "Falcons")]),
        )
        .unwrap();
        let keys: Vec<&String> = normalized.keys().collect();
        assert_eq!(keys, ["team", "coach", "extra"]);
        assert_eq!(normalized["extra"], "note");
    }

    #[test]
    fn submission_round_trips_through_storage() {
        let schema = vec![text_field("team", true)];
        let normalized = validate(&schema, &submission(&[("team", "Falcons")])).unwrap();
        let stored = submission_to_json(&normalized);
        assert_eq!(parse_submission(&stored), normalized);
    }

    #[test]
    fn corrupt_documents_decode_to_empty() {
        assert!(parse_schema("not json").is_empty());
        assert!(parse_schema("{\"truncated\":").is_empty());
        assert!(parse_submission("not json").is_empty());
    }

    #[test]
    fn schema_serde_keeps_wire_shape() {
        let schema = vec![FieldDefinition {
            name: "division".to_string(),
            required: true,
            kind: FieldKind::Select {
                options: vec!["junior".to_string(), "senior".to_string()],
            },
        }];
        let json = schema_to_json(&schema);
        assert_eq!(
            json,
            r#"[{"name":"division","type":"select","required":true,"options":"junior,senior"}]"#
        );
        assert_eq!(parse_schema(&json), schema);
    }

    #[test]
    fn unknown_field_type_decodes_as_text() {
        let schema = parse_schema(r#"[{"name":"x","type":"checkbox","required":false}]"#);
        assert_eq!(schema[0].kind, FieldKind::Text);
    }

    #[test]
    fn options_string_splits_and_trims() {
        assert_eq!(split_options("a, b ,,c"), ["a", "b", "c"]);
        assert!(split_options("").is_empty());
    }
}
