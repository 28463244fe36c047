//! OpenAPI Specification for the VITAL API
//!
//! Uses utoipa to generate the OpenAPI document from Rust types and route
//! annotations.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::{ApiError, ErrorCode};
use crate::types::*;

// Import route modules for path references
use crate::routes::{
    exercise, habit, habit_log, health, journal, life_assessment, measurement, personal_record,
    profile, stats, workout, workout_template,
};

// Import domain types from vital-core
use vital_core::{
    BodyMeasurement, DateRange, Exercise, ExerciseType, Habit, HabitLog, JournalEntry,
    LifeAssessment, Period, PersonalRecord, Sex, Trend, UserProfile, Workout, WorkoutTemplate,
};

// Import derived read models from vital-engine
use vital_engine::{
    BodyMetricsReport, BodyTrends, ComparisonDelta, HabitStats, MeasurementPoint,
    PeriodComparison, PeriodWindowStats, RecordSummary, WeekWindow,
};

/// OpenAPI document for the VITAL API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "VITAL API",
        version = "0.3.0",
        description = "Personal health and habit tracking - habits, workouts, body metrics, and the derived stats that make them useful",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "VITAL", url = "https://github.com/vital-run/vital")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local Development")
    ),
    tags(
        (name = "Habits", description = "Habit definitions"),
        (name = "Habit Logs", description = "Per-day habit completion records"),
        (name = "Workouts", description = "Workout session management"),
        (name = "Workout Templates", description = "Reusable workout structures"),
        (name = "Exercises", description = "Exercise library, user-owned plus the standard set"),
        (name = "Personal Records", description = "Lift PR entries"),
        (name = "Measurements", description = "Body measurement samples"),
        (name = "Journal", description = "Free-form journal entries with mood"),
        (name = "Life Assessments", description = "Wheel-of-life area scores"),
        (name = "Profile", description = "User profile (BMI/BMR inputs)"),
        (name = "Stats", description = "Derived read models from the aggregation engine"),
        (name = "Health", description = "Service health probes")
    ),
    paths(
        // === Habit Routes ===
        habit::create_habit,
        habit::list_habits,
        habit::get_habit,
        habit::update_habit,
        habit::delete_habit,

        // === Habit Log Routes ===
        habit_log::create_habit_log,
        habit_log::list_today_logs,
        habit_log::update_habit_log,
        habit_log::delete_habit_log,

        // === Workout Routes ===
        workout::create_workout,
        workout::list_workouts,
        workout::get_workout,
        workout::update_workout,
        workout::delete_workout,

        // === Workout Template Routes ===
        workout_template::create_template,
        workout_template::list_templates,
        workout_template::get_template,
        workout_template::update_template,
        workout_template::delete_template,

        // === Exercise Library Routes ===
        exercise::create_exercise,
        exercise::list_exercises,
        exercise::get_exercise,
        exercise::update_exercise,
        exercise::delete_exercise,

        // === Personal Record Routes ===
        personal_record::create_record,
        personal_record::list_records,
        personal_record::delete_record,

        // === Measurement Routes ===
        measurement::create_measurement,
        measurement::list_measurements,
        measurement::delete_measurement,

        // === Journal Routes ===
        journal::create_entry,
        journal::list_entries,
        journal::delete_entry,

        // === Life Assessment Routes ===
        life_assessment::create_assessment,
        life_assessment::list_assessments,
        life_assessment::delete_assessment,

        // === Profile Routes ===
        profile::get_profile,
        profile::put_profile,

        // === Stats Routes ===
        stats::habit_stats_handler,
        stats::weekly_workouts_handler,
        stats::progress_handler,
        stats::personal_records_handler,
        stats::body_metrics_handler,

        // === Health Routes ===
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(
        schemas(
            // === Error Types ===
            ApiError, ErrorCode,

            // === Habit Types ===
            CreateHabitRequest, UpdateHabitRequest, HabitListResponse,
            CreateHabitLogRequest, UpdateHabitLogRequest, HabitLogListResponse,

            // === Workout Types ===
            CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListResponse,
            CreateTemplateRequest, UpdateTemplateRequest, TemplateListResponse,
            CreateExerciseRequest, UpdateExerciseRequest, ExerciseListResponse,
            CreatePersonalRecordRequest, PersonalRecordListResponse,

            // === Measurement Types ===
            CreateMeasurementRequest, MeasurementListResponse,

            // === Journal / Assessment Types ===
            CreateJournalEntryRequest, JournalListResponse,
            CreateLifeAssessmentRequest, LifeAssessmentListResponse,

            // === Profile Types ===
            UpdateProfileRequest,

            // === Stats Types ===
            HabitStatsResponse, WeeklyWorkoutStatsResponse,

            // === Health Types ===
            health::HealthResponse, health::HealthStatus, health::HealthDetails,

            // === Core Domain Types (from vital-core) ===
            Habit, HabitLog, Workout, WorkoutTemplate, Exercise, PersonalRecord,
            BodyMeasurement, JournalEntry, LifeAssessment, UserProfile,
            Sex, Trend, Period, ExerciseType, DateRange,

            // === Derived Read Models (from vital-engine) ===
            HabitStats, WeekWindow,
            PeriodComparison, PeriodWindowStats, ComparisonDelta,
            RecordSummary, BodyMetricsReport, BodyTrends, MeasurementPoint,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security scheme modifier for the OpenAPI document.
///
/// Identity is a plain header, not a credential; it is modeled as an API key
/// scheme so generated clients send it on every request.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "user_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                    crate::context::USER_ID_HEADER,
                ))),
            );
        }
    }
}

impl ApiDoc {
    /// Generate the OpenAPI spec as a JSON string.
    pub fn to_json() -> Result<String, serde_json::Error> {
        let openapi = Self::openapi();
        serde_json::to_string_pretty(&openapi)
    }
}
