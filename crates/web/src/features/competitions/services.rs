use sqlx::PgPool;
use storage::dto::competition::{
    CreateCompetitionRequest, UpdateCompetitionRequest, rows_to_definitions,
};
use storage::forms;
use storage::models::Competition;
use storage::repository::competition::CompetitionRepository;
use uuid::Uuid;

use crate::actor::Actor;
use crate::error::{WebError, WebResult};
use crate::policy;

/// List all competitions, newest start date first
pub async fn list_competitions(pool: &PgPool) -> WebResult<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    Ok(repo.list().await?)
}

/// Get a competition by ID
pub async fn get_competition(pool: &PgPool, id: Uuid) -> WebResult<Competition> {
    let repo = CompetitionRepository::new(pool);
    Ok(repo.find_by_id(id).await?)
}

/// Create a new competition with its form schema
pub async fn create_competition(
    pool: &PgPool,
    actor: &Actor,
    req: &CreateCompetitionRequest,
    max_form_fields: usize,
) -> WebResult<Competition> {
    policy::require_admin(actor)?;

    let definitions = req.field_definitions();
    if definitions.len() > max_form_fields {
        return Err(WebError::BadRequest(format!(
            "A registration form may declare at most {} fields",
            max_form_fields
        )));
    }

    let schema = forms::schema_to_json(&definitions);

    let repo = CompetitionRepository::new(pool);
    Ok(repo.create(req, &schema).await?)
}

/// Update a competition; a new field list replaces the stored schema
pub async fn update_competition(
    pool: &PgPool,
    actor: &Actor,
    id: Uuid,
    req: &UpdateCompetitionRequest,
    max_form_fields: usize,
) -> WebResult<Competition> {
    policy::require_admin(actor)?;

    let repo = CompetitionRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    // the invariant holds on the merged row, not just the patch
    let start = req.start_date.unwrap_or(existing.start_date);
    let end = req.end_date.unwrap_or(existing.end_date);
    if start > end {
        return Err(WebError::BadRequest(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let schema = match &req.fields {
        Some(rows) => {
            let definitions = rows_to_definitions(rows);
            if definitions.len() > max_form_fields {
                return Err(WebError::BadRequest(format!(
                    "A registration form may declare at most {} fields",
                    max_form_fields
                )));
            }
            Some(forms::schema_to_json(&definitions))
        }
        None => None,
    };

    Ok(repo.update(id, req, schema.as_deref()).await?)
}
