//! End-to-end use-case tests. They need a live PostgreSQL (see
//! `common::create_test_pool`) and are `#[ignore]`d so the default test run
//! stays database-free:
//!
//! ```text
//! TEST_DATABASE_URL=postgres://... cargo test -p web -- --ignored
//! ```

mod common;

use serde_json::{Map, Value};
use storage::dto::competition::{CreateCompetitionRequest, FieldDefinitionRow};
use storage::dto::user::CreateUserRequest;
use storage::error::StorageError;
use storage::forms::FormError;
use uuid::Uuid;

use web::actor::Actor;
use web::error::WebError;
use web::features::{competitions, registrations, users};

fn admin_actor() -> Actor {
    Actor::User {
        user_id: Uuid::new_v4(),
        username: "admin".to_string(),
        is_admin: true,
    }
}

fn robotics_cup_request() -> CreateCompetitionRequest {
    CreateCompetitionRequest {
        title: "Robotics Cup".to_string(),
        description: "Annual robotics tournament".to_string(),
        start_date: "2026-09-01T09:00:00".parse().unwrap(),
        end_date: "2026-09-02T18:00:00".parse().unwrap(),
        fields: vec![FieldDefinitionRow {
            name: "team".to_string(),
            field_type: "text".to_string(),
            required: true,
            options: None,
        }],
    }
}

fn submission(pairs: &[(&str, &str)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn valid_submission_creates_pending_registration() {
    let pool = common::setup().await;
    let admin = admin_actor();

    let competition =
        competitions::services::create_competition(&pool, &admin, &robotics_cup_request(), 5)
            .await
            .unwrap();

    let created = registrations::services::register(
        &pool,
        competition.competition_id,
        &submission(&[("team", "Falcons")]),
        &Actor::Anonymous,
    )
    .await
    .unwrap();

    assert_eq!(created.status, "pending");
    assert_eq!(created.user_id, None);
    assert_eq!(created.form_data["team"], "Falcons");

    // the stored document round-trips through the detail view
    let detail = registrations::services::view_registration(&pool, created.registration_id, &admin)
        .await
        .unwrap();
    assert_eq!(detail.registration.form_data["team"], "Falcons");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn missing_required_field_creates_nothing() {
    let pool = common::setup().await;
    let admin = admin_actor();

    let competition =
        competitions::services::create_competition(&pool, &admin, &robotics_cup_request(), 5)
            .await
            .unwrap();

    let err = registrations::services::register(
        &pool,
        competition.competition_id,
        &Map::new(),
        &Actor::Anonymous,
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        WebError::Form(FormError::MissingRequiredField(name)) if name == "team"
    ));

    let all = registrations::services::list_registrations(&pool, &admin)
        .await
        .unwrap();
    assert!(
        !all.iter()
            .any(|r| r.competition_id == competition.competition_id)
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn triage_accepts_only_known_statuses() {
    let pool = common::setup().await;
    let admin = admin_actor();

    let competition =
        competitions::services::create_competition(&pool, &admin, &robotics_cup_request(), 5)
            .await
            .unwrap();
    let created = registrations::services::register(
        &pool,
        competition.competition_id,
        &submission(&[("team", "Falcons")]),
        &Actor::Anonymous,
    )
    .await
    .unwrap();

    let confirmed = registrations::services::triage_registration(
        &pool,
        created.registration_id,
        "confirmed",
        &admin,
    )
    .await
    .unwrap();
    assert_eq!(confirmed.status, "confirmed");

    let err = registrations::services::triage_registration(
        &pool,
        created.registration_id,
        "approved",
        &admin,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::InvalidStatus(s) if s == "approved"));

    let not_admin = Actor::User {
        user_id: Uuid::new_v4(),
        username: "user".to_string(),
        is_admin: false,
    };
    let err = registrations::services::triage_registration(
        &pool,
        created.registration_id,
        "rejected",
        &not_admin,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, WebError::Unauthorized));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn second_insert_of_a_username_is_rejected() {
    let pool = common::setup().await;
    let admin = admin_actor();

    let req = CreateUserRequest {
        username: common::unique("admin"),
        password: "admin123".to_string(),
        name: None,
        email: None,
        phone: None,
        team_name: None,
        province: None,
        is_admin: false,
    };

    users::services::create_user(&pool, &admin, &req)
        .await
        .unwrap();

    let err = users::services::create_user(&pool, &admin, &req)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WebError::Storage(StorageError::DuplicateUsername)
    ));
}
