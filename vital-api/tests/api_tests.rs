//! HTTP-level integration tests for the VITAL API.
//!
//! Every test builds a fresh router over an empty in-memory store and drives
//! it with `tower::ServiceExt::oneshot`. Stats tests pin "today" through the
//! `date` query parameter so assertions never depend on the wall clock.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;
use vital_api::{create_api_router, ApiConfig, USER_ID_HEADER};
use vital_core::new_entity_id;
use vital_storage::InMemoryStore;

// ============================================================================
// HELPERS
// ============================================================================

fn app() -> Router {
    create_api_router(Arc::new(InMemoryStore::new()), ApiConfig::default())
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn get(app: &Router, uri: &str, user: Uuid) -> (StatusCode, Value) {
    send(app, Method::GET, uri, Some(user), None).await
}

async fn post(app: &Router, uri: &str, user: Uuid, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(user), Some(body)).await
}

async fn put(app: &Router, uri: &str, user: Uuid, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(user), Some(body)).await
}

async fn delete(app: &Router, uri: &str, user: Uuid) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, Some(user), None).await
}

async fn create_habit(app: &Router, user: Uuid, name: &str) -> String {
    let (status, body) = post(app, "/api/v1/habits", user, json!({ "name": name })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["habit_id"].as_str().unwrap().to_string()
}

async fn log_habit(app: &Router, user: Uuid, habit_id: &str, date: &str, completed: bool) {
    let (status, _) = post(
        app,
        "/api/v1/habit-logs",
        user,
        json!({ "habit_id": habit_id, "date": date, "completed": completed }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn log_workout(app: &Router, user: Uuid, title: &str, occurred_at: &str) {
    let (status, _) = post(
        app,
        "/api/v1/workouts",
        user,
        json!({ "title": title, "occurred_at": occurred_at }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

// ============================================================================
// HEALTH & PLUMBING
// ============================================================================

#[tokio::test]
async fn test_ping_needs_no_user_header() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health/ping", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("pong".to_string()));
}

#[tokio::test]
async fn test_readiness_reports_store_health() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["store"], "healthy");
}

#[tokio::test]
async fn test_openapi_json_is_served() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/habits"].is_object());
    assert!(body["paths"]["/api/v1/stats/progress"].is_object());
}

#[tokio::test]
async fn test_missing_user_header_is_rejected() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/habits", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MISSING_USER_ID");
}

// ============================================================================
// HABITS & LOGS
// ============================================================================

#[tokio::test]
async fn test_habit_crud_flow() {
    let app = app();
    let user = new_entity_id();

    let (status, created) = post(
        &app,
        "/api/v1/habits",
        user,
        json!({ "name": "Read", "category": "study" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Read");
    assert_eq!(created["category"], "study");
    assert_eq!(created["target_frequency"], "daily");
    let id = created["habit_id"].as_str().unwrap().to_string();

    let (status, listed) = get(&app, "/api/v1/habits", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);

    let (status, updated) = put(
        &app,
        &format!("/api/v1/habits/{}", id),
        user,
        json!({ "name": "Read fiction" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Read fiction");
    assert_eq!(updated["category"], "study");

    let (status, _) = delete(&app, &format!("/api/v1/habits/{}", id), user).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = get(&app, &format!("/api/v1/habits/{}", id), user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn test_habit_requires_nonempty_name() {
    let app = app();
    let user = new_entity_id();
    let (status, _) = post(&app, "/api/v1/habits", user, json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_second_log_for_same_day_conflicts() {
    let app = app();
    let user = new_entity_id();
    let habit = create_habit(&app, user, "Meditate").await;

    log_habit(&app, user, &habit, "2024-03-10", true).await;
    let (status, body) = post(
        &app,
        "/api/v1/habit-logs",
        user,
        json!({ "habit_id": habit, "date": "2024-03-10", "completed": false }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "DUPLICATE_LOG");
}

#[tokio::test]
async fn test_log_for_unknown_habit_is_not_found() {
    let app = app();
    let user = new_entity_id();
    let (status, _) = post(
        &app,
        "/api/v1/habit-logs",
        user,
        json!({ "habit_id": new_entity_id(), "date": "2024-03-10", "completed": true }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_today_listing_filters_by_date() {
    let app = app();
    let user = new_entity_id();
    let habit = create_habit(&app, user, "Stretch").await;

    log_habit(&app, user, &habit, "2024-03-09", true).await;
    log_habit(&app, user, &habit, "2024-03-10", false).await;

    let (status, body) = get(&app, "/api/v1/habit-logs/today?date=2024-03-10", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["logs"][0]["date"], "2024-03-10");
    assert_eq!(body["logs"][0]["completed"], false);
}

#[tokio::test]
async fn test_users_never_see_each_other() {
    let app = app();
    let alice = new_entity_id();
    let bob = new_entity_id();

    let habit = create_habit(&app, alice, "Run").await;

    let (status, body) = get(&app, "/api/v1/habits", bob).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);

    let (status, _) = get(&app, &format!("/api/v1/habits/{}", habit), bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// WORKOUTS
// ============================================================================

#[tokio::test]
async fn test_workout_crud_and_feeling_bounds() {
    let app = app();
    let user = new_entity_id();

    let (status, body) = post(
        &app,
        "/api/v1/workouts",
        user,
        json!({ "title": "Leg day", "feeling": 9 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RANGE");

    let (status, created) = post(
        &app,
        "/api/v1/workouts",
        user,
        json!({ "title": "Leg day", "occurred_at": "2024-03-10T18:00:00Z" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["feeling"], 3);
    let id = created["workout_id"].as_str().unwrap().to_string();

    let (status, updated) = put(
        &app,
        &format!("/api/v1/workouts/{}", id),
        user,
        json!({ "feeling": 5, "comments": "new squat PR" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["feeling"], 5);
    assert_eq!(updated["comments"], "new squat PR");

    let (status, _) = delete(&app, &format!("/api/v1/workouts/{}", id), user).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// STATS
// ============================================================================

#[tokio::test]
async fn test_habit_stats_document() {
    let app = app();
    let user = new_entity_id();
    let reading = create_habit(&app, user, "Read").await;
    let running = create_habit(&app, user, "Run").await;

    log_habit(&app, user, &reading, "2024-03-10", true).await;
    log_habit(&app, user, &running, "2024-03-10", true).await;
    log_habit(&app, user, &reading, "2024-03-09", true).await;
    log_workout(&app, user, "Push", "2024-03-08T07:30:00Z").await;

    let (status, body) = get(&app, "/api/v1/stats/habits?date=2024-03-10", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-03-10");
    assert_eq!(body["stats"]["total_habits"], 2);
    assert_eq!(body["stats"]["completed_today"], 2);
    assert_eq!(body["stats"]["completed_week"], 3);
    assert_eq!(body["stats"]["streak"], 2);
    assert_eq!(body["stats"]["completion_rate_today"], 100.0);
    // 2024-03-08 falls in the Monday-to-Sunday week of 2024-03-10.
    assert_eq!(body["weekly_workouts"], 1);
}

#[tokio::test]
async fn test_weekly_workout_target() {
    let app = app();
    let user = new_entity_id();

    // Week of 2024-03-10 (Sunday) runs 2024-03-04 through 2024-03-10.
    log_workout(&app, user, "A", "2024-03-04T06:00:00Z").await;
    log_workout(&app, user, "B", "2024-03-10T21:00:00Z").await;
    log_workout(&app, user, "outside", "2024-03-11T06:00:00Z").await;

    let (status, body) = get(
        &app,
        "/api/v1/stats/workouts/weekly?date=2024-03-10",
        user,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["week"]["start"], "2024-03-04");
    assert_eq!(body["week"]["end"], "2024-03-10");
    assert_eq!(body["workout_count"], 2);
    assert_eq!(body["target"], 5);
    assert_eq!(body["target_met"], false);
}

#[tokio::test]
async fn test_progress_comparison_counts_and_trend() {
    let app = app();
    let user = new_entity_id();
    let habit = create_habit(&app, user, "Write").await;

    // Current window for month @ 2024-03-10: [2024-02-10, 2024-03-10].
    // Previous window: [2024-01-10, 2024-02-09].
    log_habit(&app, user, &habit, "2024-03-01", true).await;
    log_habit(&app, user, &habit, "2024-01-20", true).await;
    log_habit(&app, user, &habit, "2024-02-09", true).await;
    log_habit(&app, user, &habit, "2024-02-05", false).await; // incomplete, never counted
    log_workout(&app, user, "Pull", "2024-02-20T18:00:00Z").await;

    let (status, body) = get(
        &app,
        "/api/v1/stats/progress?period=month&date=2024-03-10",
        user,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["period"], "month");
    assert_eq!(body["current_period"]["start"], "2024-02-10");
    assert_eq!(body["current_period"]["end"], "2024-03-10");
    assert_eq!(body["current_period"]["habits_completed"], 1);
    assert_eq!(body["previous_period"]["habits_completed"], 2);
    assert_eq!(body["comparison"]["habits_change_percent"], -50.0);
    assert_eq!(body["comparison"]["habits_trend"], "down");
    // One workout from nothing: change pinned to 0, trend still up.
    assert_eq!(body["current_period"]["workouts_completed"], 1);
    assert_eq!(body["comparison"]["workouts_change_percent"], 0.0);
    assert_eq!(body["comparison"]["workouts_trend"], "up");
}

#[tokio::test]
async fn test_progress_rejects_malformed_custom_days() {
    let app = app();
    let user = new_entity_id();

    // Malformed, zero and absurdly large day counts are all rejected up
    // front, never turned into window arithmetic.
    for days in ["soon", "0", "100000000000"] {
        let uri = format!("/api/v1/stats/progress?period=custom&days={}", days);
        let (status, body) = get(&app, &uri, user).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "days={}", days);
        assert_eq!(body["code"], "INVALID_PERIOD", "days={}", days);
    }

    let (status, _) = get(&app, "/api/v1/stats/progress?period=custom&days=3650", user).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_personal_record_rollup() {
    let app = app();
    let user = new_entity_id();

    for (name, weight, reps, date) in [
        ("Squat", 140.0, 1, "2024-01-15"),
        ("Bench", 100.0, 5, "2024-01-01"),
        ("Bench", 90.0, 3, "2024-02-01"),
    ] {
        let (status, _) = post(
            &app,
            "/api/v1/personal-records",
            user,
            json!({ "exercise_name": name, "weight_kg": weight, "reps": reps, "date": date }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/v1/stats/personal-records", user).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    // Sorted by exercise name; best weight is the max, latest is the newest entry.
    assert_eq!(rows[0]["exercise_name"], "Bench");
    assert_eq!(rows[0]["best_weight_kg"], 100.0);
    assert_eq!(rows[0]["latest_reps"], 3);
    assert_eq!(rows[0]["total_entries"], 2);
    assert_eq!(rows[1]["exercise_name"], "Squat");
}

#[tokio::test]
async fn test_personal_record_rejects_non_finite_weight() {
    let app = app();
    let user = new_entity_id();

    // 1e309 overflows f64 and parses as infinity.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/personal-records")
        .header(USER_ID_HEADER, user.to_string())
        .header("content-type", "application/json")
        .body(Body::from(
            r#"{"exercise_name":"Bench","weight_kg":1e309,"date":"2024-03-01"}"#,
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "INVALID_INPUT");

    let (status, _) = post(
        &app,
        "/api/v1/personal-records",
        user,
        json!({ "exercise_name": "Bench", "weight_kg": -5.0, "date": "2024-03-01" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// WORKOUT TEMPLATES & EXERCISE LIBRARY
// ============================================================================

#[tokio::test]
async fn test_template_crud_flow() {
    let app = app();
    let user = new_entity_id();

    let (status, body) = post(
        &app,
        "/api/v1/templates",
        user,
        json!({
            "name": "Workout A - Chest",
            "exercises": [{ "name": "Bench Press", "sets": 4, "reps": 8 }]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let template_id = body["template_id"].as_str().unwrap().to_string();
    assert_eq!(body["exercises"][0]["name"], "Bench Press");

    let (status, body) = get(&app, "/api/v1/templates", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);

    // Renaming leaves the exercise payload alone.
    let uri = format!("/api/v1/templates/{}", template_id);
    let (status, body) = put(&app, &uri, user, json!({ "name": "Workout A" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Workout A");
    assert_eq!(body["exercises"][0]["sets"], 4);

    let (status, _) = delete(&app, &uri, user).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get(&app, &uri, user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_templates_are_user_scoped() {
    let app = app();
    let owner = new_entity_id();
    let stranger = new_entity_id();

    let (status, body) = post(
        &app,
        "/api/v1/templates",
        owner,
        json!({ "name": "Leg Day" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let uri = format!("/api/v1/templates/{}", body["template_id"].as_str().unwrap());

    let (status, _) = get(&app, &uri, stranger).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = get(&app, "/api/v1/templates", stranger).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_exercise_library_is_seeded_and_shared() {
    let app = app();
    let user = new_entity_id();

    let (status, body) = get(&app, "/api/v1/exercises", user).await;
    assert_eq!(status, StatusCode::OK);
    let exercises = body["exercises"].as_array().unwrap();
    assert!(!exercises.is_empty());
    assert!(exercises.iter().all(|e| e["owner"].is_null()));
    assert!(exercises.iter().any(|e| e["name"] == "Bench Press"));

    // Another user sees the same standard set.
    let (_, other_body) = get(&app, "/api/v1/exercises", new_entity_id()).await;
    assert_eq!(other_body["total"], body["total"]);
}

#[tokio::test]
async fn test_own_exercises_mix_with_public_and_stay_private() {
    let app = app();
    let user = new_entity_id();
    let other = new_entity_id();

    let (status, body) = post(
        &app,
        "/api/v1/exercises",
        user,
        json!({ "name": "Sled Push", "exercise_type": "cardio", "muscle_group": "Legs" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["exercise_type"], "cardio");
    let uri = format!("/api/v1/exercises/{}", body["exercise_id"].as_str().unwrap());

    // A second entry with the same name in the same library conflicts.
    let (status, body) = post(
        &app,
        "/api/v1/exercises",
        user,
        json!({ "name": "Sled Push" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "ENTITY_ALREADY_EXISTS");

    // The other user neither sees it nor collides with it.
    let (status, _) = get(&app, &uri, other).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = post(
        &app,
        "/api/v1/exercises",
        other,
        json!({ "name": "Sled Push" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // The owner can still edit their entry.
    let (status, body) = put(&app, &uri, user, json!({ "muscle_group": "Full Body" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["muscle_group"], "Full Body");
    assert_eq!(body["name"], "Sled Push");
}

#[tokio::test]
async fn test_public_exercises_cannot_be_mutated() {
    let app = app();
    let user = new_entity_id();

    let (_, body) = get(&app, "/api/v1/exercises", user).await;
    let public_id = body["exercises"][0]["exercise_id"].as_str().unwrap().to_string();
    let uri = format!("/api/v1/exercises/{}", public_id);

    // Readable by anyone, editable by no one.
    let (status, _) = get(&app, &uri, user).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = put(&app, &uri, user, json!({ "name": "Hijacked" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = delete(&app, &uri, user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_body_metrics_report_with_profile() {
    let app = app();
    let user = new_entity_id();

    let (status, _) = put(
        &app,
        "/api/v1/profile",
        user,
        json!({ "height_cm": 180.0, "birth_date": "1990-06-15", "sex": "male" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (date, weight) in [("2024-01-01", 82.0), ("2024-03-01", 80.0)] {
        let (status, _) = post(
            &app,
            "/api/v1/measurements",
            user,
            json!({ "date": date, "weight_kg": weight }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/api/v1/stats/body-metrics?date=2024-03-10", user).await;
    assert_eq!(status, StatusCode::OK);

    let points = body["measurements"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    // Chronological order, oldest first.
    assert_eq!(points[0]["date"], "2024-01-01");
    assert_eq!(points[1]["date"], "2024-03-01");
    // 80 kg at 1.80 m is BMI 24.7.
    assert_eq!(points[1]["bmi"], 24.7);
    assert!(points[1]["bmr"].is_number());

    assert_eq!(body["trends"]["weight_change_kg"], -2.0);
    assert_eq!(body["latest"]["weight_kg"], 80.0);
}

#[tokio::test]
async fn test_body_metrics_degrade_without_profile() {
    let app = app();
    let user = new_entity_id();

    let (status, _) = post(
        &app,
        "/api/v1/measurements",
        user,
        json!({ "date": "2024-03-01", "weight_kg": 80.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/v1/stats/body-metrics?date=2024-03-10", user).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["measurements"][0]["bmi"].is_null());
    assert!(body["measurements"][0]["bmr"].is_null());
}

#[tokio::test]
async fn test_measurement_rejects_nonpositive_weight() {
    let app = app();
    let user = new_entity_id();
    let (status, body) = post(
        &app,
        "/api/v1/measurements",
        user,
        json!({ "date": "2024-03-01", "weight_kg": 0.0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MEASUREMENT");
}

// ============================================================================
// JOURNAL, ASSESSMENTS & PROFILE
// ============================================================================

#[tokio::test]
async fn test_journal_flow() {
    let app = app();
    let user = new_entity_id();

    let (status, _) = post(
        &app,
        "/api/v1/journal",
        user,
        json!({ "content": "rough day", "mood": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = post(
        &app,
        "/api/v1/journal",
        user,
        json!({ "content": "good run this morning", "mood": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["mood"], 4);

    let (status, listed) = get(&app, "/api/v1/journal", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
}

#[tokio::test]
async fn test_life_assessment_scores_validated() {
    let app = app();
    let user = new_entity_id();

    let mut scores = json!({
        "date": "2024-03-10",
        "health_score": 7, "career_score": 6, "financial_score": 5,
        "social_score": 8, "family_score": 9, "love_score": 7,
        "spiritual_score": 4, "intellectual_score": 8
    });

    scores["career_score"] = json!(11);
    let (status, body) = post(&app, "/api/v1/life-assessments", user, scores.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_RANGE");

    scores["career_score"] = json!(6);
    let (status, created) = post(&app, "/api/v1/life-assessments", user, scores).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["health_score"], 7);

    let (status, listed) = get(&app, "/api/v1/life-assessments", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
}

#[tokio::test]
async fn test_profile_upsert_patches_fields() {
    let app = app();
    let user = new_entity_id();

    let (status, body) = get(&app, "/api/v1/profile", user).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PROFILE_NOT_FOUND");

    let (status, _) = put(&app, "/api/v1/profile", user, json!({ "height_cm": 180.0 })).await;
    assert_eq!(status, StatusCode::OK);

    // A later patch must not clear previously set fields.
    let (status, _) = put(&app, "/api/v1/profile", user, json!({ "sex": "female" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/v1/profile", user).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["height_cm"], 180.0);
    assert_eq!(body["sex"], "female");
    assert!(body["birth_date"].is_null());
}
