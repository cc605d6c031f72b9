use sqlx::PgPool;
use storage::dto::registration::{RegistrationDetailResponse, RegistrationResponse};
use storage::forms::{self, Submission};
use storage::models::RegistrationStatus;
use storage::repository::competition::CompetitionRepository;
use storage::repository::registration::RegistrationRepository;
use uuid::Uuid;

use crate::actor::Actor;
use crate::error::{WebError, WebResult};
use crate::policy;

/// Register for a competition. The submission is validated against the
/// competition's form schema; authenticated actors own the created row,
/// anonymous submissions have no owner. The row starts out pending.
pub async fn register(
    pool: &PgPool,
    competition_id: Uuid,
    submission: &Submission,
    actor: &Actor,
) -> WebResult<RegistrationResponse> {
    let competition = CompetitionRepository::new(pool)
        .find_by_id(competition_id)
        .await?;

    let schema = forms::parse_schema(&competition.form_fields);
    let normalized = forms::validate(&schema, submission)?;
    let form_data = forms::submission_to_json(&normalized);

    let registration = RegistrationRepository::new(pool)
        .create(competition_id, actor.user_id(), &form_data)
        .await?;

    tracing::info!(
        registration_id = %registration.registration_id,
        competition_id = %competition_id,
        anonymous = actor.user_id().is_none(),
        "Registration submitted"
    );

    Ok(RegistrationResponse::from(registration))
}

/// Read one registration with its competition; owner and admins only
pub async fn view_registration(
    pool: &PgPool,
    id: Uuid,
    actor: &Actor,
) -> WebResult<RegistrationDetailResponse> {
    let registration = RegistrationRepository::new(pool).find_by_id(id).await?;

    policy::ensure_can_view_registration(actor, &registration)?;

    let competition = CompetitionRepository::new(pool)
        .find_by_id(registration.competition_id)
        .await?;

    Ok(RegistrationDetailResponse::new(registration, competition))
}

/// Set a registration's triage status; admins only, and only the three
/// known statuses are accepted.
pub async fn triage_registration(
    pool: &PgPool,
    id: Uuid,
    status: &str,
    actor: &Actor,
) -> WebResult<RegistrationResponse> {
    policy::require_admin(actor)?;

    let status: RegistrationStatus = status
        .parse()
        .map_err(|_| WebError::InvalidStatus(status.to_string()))?;

    let registration = RegistrationRepository::new(pool)
        .update_status(id, status)
        .await?;

    Ok(RegistrationResponse::from(registration))
}

/// List every registration; admins only
pub async fn list_registrations(
    pool: &PgPool,
    actor: &Actor,
) -> WebResult<Vec<RegistrationResponse>> {
    policy::require_admin(actor)?;

    let registrations = RegistrationRepository::new(pool).list().await?;

    Ok(registrations
        .into_iter()
        .map(RegistrationResponse::from)
        .collect())
}
