//! HTTP-level integration tests for the skill, personnel, and project
//! endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_id, delete, get, post_json, put_json};
use serde_json::json;
use skillmatch_api::error::AppError;
use skillmatch_db::models::project::UpdateProject;
use skillmatch_db::repositories::ProjectRepo;
use sqlx::PgPool;

async fn create_skill(pool: &PgPool, name: &str) -> i64 {
    create_id(
        pool,
        "/api/v1/skills",
        json!({"name": name, "category": "Programming Language"}),
    )
    .await
}

async fn create_person(pool: &PgPool, name: &str, email: &str) -> i64 {
    create_id(
        pool,
        "/api/v1/personnel",
        json!({"name": name, "email": email}),
    )
    .await
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_skill_returns_201(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/skills",
        json!({"name": "Rust", "category": "Programming Language", "description": "Systems"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Rust");
    assert_eq!(json["category"], "Programming Language");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_skill_rejects_unknown_category(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/skills",
        json!({"name": "Juggling", "category": "Circus"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_skill_rejects_blank_name(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/skills",
        json!({"name": "  ", "category": "Tool"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_skills_is_ordered_by_name(pool: PgPool) {
    create_skill(&pool, "SQL").await;
    create_skill(&pool, "Go").await;

    let response = get(build_test_app(pool), "/api/v1/skills").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Go", "SQL"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_delete_skill(pool: PgPool) {
    let id = create_skill(&pool, "Pyhton").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/skills/{id}"),
        json!({"name": "Python"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Python");
    assert_eq!(json["category"], "Programming Language");

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/skills/{id}"),
        json!({"description": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["description"].is_null());

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/skills/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/v1/skills/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_personnel_defaults_to_junior(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/personnel",
        json!({"name": "Ada", "email": "ada@example.com", "role": "Engineer"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["experience_level"], "Junior");
    assert_eq!(json["role"], "Engineer");
    assert_eq!(json["skills"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_personnel_rejects_bad_email(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/personnel",
        json!({"name": "Ada", "email": "not-an-email"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_personnel_rejects_unknown_experience_level(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/personnel",
        json!({"name": "Ada", "email": "ada@example.com", "experience_level": "Wizard"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_email_returns_409(pool: PgPool) {
    create_person(&pool, "Ada", "ada@example.com").await;

    let response = post_json(
        build_test_app(pool),
        "/api/v1/personnel",
        json!({"name": "Other Ada", "email": "ada@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_assign_skill_and_read_back(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let ada = create_person(&pool, "Ada", "ada@example.com").await;

    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/personnel/{ada}/skills"),
        json!({"skill_id": rust, "proficiency": "Expert"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(build_test_app(pool), &format!("/api/v1/personnel/{ada}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["skills"][0]["skill_id"], rust);
    assert_eq!(json["skills"][0]["name"], "Rust");
    assert_eq!(json["skills"][0]["proficiency"], "Expert");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_assign_same_skill_twice_returns_409(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let ada = create_person(&pool, "Ada", "ada@example.com").await;
    let uri = format!("/api/v1/personnel/{ada}/skills");

    let first = post_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"skill_id": rust, "proficiency": "Beginner"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        build_test_app(pool),
        &uri,
        json!({"skill_id": rust, "proficiency": "Expert"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_assign_rejects_unknown_proficiency(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let ada = create_person(&pool, "Ada", "ada@example.com").await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/personnel/{ada}/skills"),
        json!({"skill_id": rust, "proficiency": "Guru"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_assign_unknown_skill_returns_404(pool: PgPool) {
    let ada = create_person(&pool, "Ada", "ada@example.com").await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/personnel/{ada}/skills"),
        json!({"skill_id": 999999, "proficiency": "Expert"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_skill(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let ada = create_person(&pool, "Ada", "ada@example.com").await;
    post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/personnel/{ada}/skills"),
        json!({"skill_id": rust, "proficiency": "Expert"}),
    )
    .await;
    let uri = format!("/api/v1/personnel/{ada}/skills/{rust}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(build_test_app(pool), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_personnel_null_role_clears_it(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/personnel",
        json!({"name": "Ada", "email": "ada@example.com", "role": "Engineer"}),
    )
    .await;
    let ada = body_json(response).await["id"].as_i64().unwrap();
    let uri = format!("/api/v1/personnel/{ada}");

    // Absent key leaves the role alone.
    let response = put_json(build_test_app(pool.clone()), &uri, json!({"name": "Ada L."})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["role"], "Engineer");

    let response = put_json(build_test_app(pool), &uri, json!({"role": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["role"].is_null());
    assert_eq!(json["name"], "Ada L.");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_and_delete_personnel(pool: PgPool) {
    let ada = create_person(&pool, "Ada", "ada@example.com").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/personnel/{ada}"),
        json!({"experience_level": "Senior"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["experience_level"], "Senior");
    assert_eq!(json["email"], "ada@example.com");

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/personnel/{ada}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool), &format!("/api/v1/personnel/{ada}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_with_requirements(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let sql = create_skill(&pool, "SQL").await;

    let response = post_json(
        build_test_app(pool),
        "/api/v1/projects",
        json!({
            "name": "Portal",
            "start_date": "2024-01-01",
            "end_date": "2024-06-30",
            "required_skills": [
                {"skill_id": sql, "min_proficiency": "Intermediate"},
                {"skill_id": rust, "min_proficiency": "Advanced"}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Portal");
    assert_eq!(json["status"], "Planning");
    assert_eq!(json["start_date"], "2024-01-01");
    assert_eq!(json["required_skills"][0]["name"], "SQL");
    assert_eq!(json["required_skills"][0]["min_proficiency"], "Intermediate");
    assert_eq!(json["required_skills"][1]["name"], "Rust");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_rejects_reversed_dates(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/projects",
        json!({"name": "Backwards", "start_date": "2024-06-30", "end_date": "2024-01-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_rejects_duplicate_requirement(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;

    let response = post_json(
        build_test_app(pool),
        "/api/v1/projects",
        json!({
            "name": "Twice",
            "required_skills": [
                {"skill_id": rust, "min_proficiency": "Beginner"},
                {"skill_id": rust, "min_proficiency": "Expert"}
            ]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_with_unknown_skill_returns_400(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        json!({
            "name": "Ghost",
            "required_skills": [{"skill_id": 999999, "min_proficiency": "Beginner"}]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let list = body_json(get(build_test_app(pool), "/api/v1/projects").await).await;
    assert_eq!(list, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_replaces_requirements(pool: PgPool) {
    let rust = create_skill(&pool, "Rust").await;
    let sql = create_skill(&pool, "SQL").await;
    let id = create_id(
        &pool,
        "/api/v1/projects",
        json!({
            "name": "Portal",
            "required_skills": [{"skill_id": rust, "min_proficiency": "Beginner"}]
        }),
    )
    .await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        json!({
            "status": "Active",
            "required_skills": [{"skill_id": sql, "min_proficiency": "Expert"}]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Active");
    assert_eq!(json["name"], "Portal");
    let reqs = json["required_skills"].as_array().unwrap();
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0]["skill_id"], sql);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_checks_dates_against_stored_values(pool: PgPool) {
    let id = create_id(
        &pool,
        "/api/v1/projects",
        json!({"name": "Portal", "start_date": "2024-03-01"}),
    )
    .await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        json!({"end_date": "2024-02-01"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_null_end_date_reopens_it(pool: PgPool) {
    let id = create_id(
        &pool,
        "/api/v1/projects",
        json!({
            "name": "Portal",
            "description": "Client portal",
            "start_date": "2024-01-01",
            "end_date": "2024-06-30"
        }),
    )
    .await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        json!({"end_date": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["end_date"].is_null());
    assert_eq!(json["start_date"], "2024-01-01");
    assert_eq!(json["description"], "Client portal");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_date_range_check_violation_maps_to_400(pool: PgPool) {
    use axum::response::IntoResponse;

    let id = create_id(
        &pool,
        "/api/v1/projects",
        json!({"name": "Portal", "start_date": "2024-03-01"}),
    )
    .await;

    // Bypass handler validation to hit ck_projects_date_range directly,
    // as a racing writer would.
    let update = UpdateProject {
        end_date: Some(Some("2024-01-01".parse().unwrap())),
        ..Default::default()
    };
    let err = ProjectRepo::update(&pool, id, &update).await.unwrap_err();

    let response = AppError::Database(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_rejects_unknown_status(pool: PgPool) {
    let id = create_id(&pool, "/api/v1/projects", json!({"name": "Portal"})).await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/projects/{id}"),
        json!({"status": "Abandoned"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project(pool: PgPool) {
    let id = create_id(&pool, "/api/v1/projects", json!({"name": "Gone"})).await;

    let response = delete(build_test_app(pool.clone()), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(build_test_app(pool), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
