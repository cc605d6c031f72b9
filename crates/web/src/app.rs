use std::sync::Arc;

use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::features;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<Config>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::login,
        features::auth::handlers::logout,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::update_competition,
        features::registrations::handlers::submit_registration,
        features::registrations::handlers::get_registration,
        features::registrations::handlers::update_registration_status,
        features::registrations::handlers::list_registrations,
        features::notices::handlers::list_public_notices,
        features::notices::handlers::get_notice,
        features::notices::handlers::publish_notice,
        features::notices::handlers::list_all_notices,
        features::schedules::handlers::publish_schedule,
        features::schedules::handlers::list_schedules,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::users::handlers::update_user,
        features::dashboard::handlers::view_dashboard,
        features::dashboard::handlers::admin_overview,
    ),
    components(
        schemas(
            storage::dto::auth::LoginRequest,
            storage::dto::auth::SessionResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UpdateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::competition::FieldDefinitionRow,
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::UpdateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::registration::SubmitRegistrationRequest,
            storage::dto::registration::UpdateRegistrationStatusRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::registration::RegistrationDetailResponse,
            storage::dto::notice::CreateNoticeRequest,
            storage::dto::schedule::CreateScheduleRequest,
            storage::dto::dashboard::RegistrationSummary,
            storage::dto::dashboard::DashboardResponse,
            storage::dto::admin::AdminOverviewResponse,
            storage::models::Notice,
            storage::models::Schedule,
        )
    ),
    tags(
        (name = "auth", description = "Login and logout"),
        (name = "competitions", description = "Competition catalogue and management"),
        (name = "registrations", description = "Competition sign-ups and triage"),
        (name = "notices", description = "Public and targeted announcements"),
        (name = "schedules", description = "Per-user schedule entries"),
        (name = "users", description = "User administration"),
        (name = "dashboard", description = "User dashboard and admin console"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("Session token")
                        .build(),
                ),
            )
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(features::auth::routes::routes())
        .merge(features::competitions::routes::routes())
        .merge(features::registrations::routes::routes())
        .merge(features::notices::routes::routes())
        .merge(features::schedules::routes::routes())
        .merge(features::users::routes::routes())
        .merge(features::dashboard::routes::routes());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}
