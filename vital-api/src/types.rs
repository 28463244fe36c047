//! Request and Response Types for the VITAL API
//!
//! Request bodies are deserialized and validated in the route handlers before
//! any entity is constructed; responses reuse the core entity types plus a
//! few wrappers for lists and engine-backed stats documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vital_core::{
    BodyMeasurement, Exercise, ExerciseType, Habit, HabitLog, JournalEntry, LifeAssessment,
    PersonalRecord, Sex, Timestamp, Workout, WorkoutTemplate,
};
use vital_engine::{HabitStats, WeekWindow};

// ============================================================================
// HABITS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateHabitRequest {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub target_frequency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub target_frequency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HabitListResponse {
    pub habits: Vec<Habit>,
    pub total: usize,
}

// ============================================================================
// HABIT LOGS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateHabitLogRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub habit_id: Uuid,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateHabitLogRequest {
    pub completed: Option<bool>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HabitLogListResponse {
    pub logs: Vec<HabitLog>,
    pub total: usize,
}

// ============================================================================
// WORKOUTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateWorkoutRequest {
    pub title: String,
    /// Session timestamp; defaults to now.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date-time"))]
    pub occurred_at: Option<Timestamp>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub exercises: Option<serde_json::Value>,
    /// Perceived session quality, 1 to 5; defaults to 3.
    #[serde(default)]
    pub feeling: Option<i16>,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateWorkoutRequest {
    pub title: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub exercises: Option<serde_json::Value>,
    pub feeling: Option<i16>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkoutListResponse {
    pub workouts: Vec<Workout>,
    pub total: usize,
}

// ============================================================================
// WORKOUT TEMPLATES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateTemplateRequest {
    pub name: String,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub exercises: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateTemplateRequest {
    pub name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub exercises: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TemplateListResponse {
    pub templates: Vec<WorkoutTemplate>,
    pub total: usize,
}

// ============================================================================
// EXERCISE LIBRARY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateExerciseRequest {
    pub name: String,
    /// Defaults to `strength`.
    #[serde(default)]
    pub exercise_type: Option<ExerciseType>,
    #[serde(default)]
    pub muscle_group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateExerciseRequest {
    pub name: Option<String>,
    pub exercise_type: Option<ExerciseType>,
    pub muscle_group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ExerciseListResponse {
    pub exercises: Vec<Exercise>,
    pub total: usize,
}

// ============================================================================
// PERSONAL RECORDS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePersonalRecordRequest {
    pub exercise_name: String,
    pub weight_kg: f64,
    /// Rep count; defaults to 1 (a true one-rep max).
    #[serde(default)]
    pub reps: Option<i32>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonalRecordListResponse {
    pub records: Vec<PersonalRecord>,
    pub total: usize,
}

// ============================================================================
// BODY MEASUREMENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateMeasurementRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(default)]
    pub muscle_mass_kg: Option<f64>,
    #[serde(default)]
    pub fat_percentage: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MeasurementListResponse {
    pub measurements: Vec<BodyMeasurement>,
    pub total: usize,
}

// ============================================================================
// JOURNAL
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateJournalEntryRequest {
    pub content: String,
    /// Mood rating, 1 to 5.
    pub mood: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JournalListResponse {
    pub entries: Vec<JournalEntry>,
    pub total: usize,
}

// ============================================================================
// LIFE ASSESSMENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateLifeAssessmentRequest {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub health_score: i16,
    pub career_score: i16,
    pub financial_score: i16,
    pub social_score: i16,
    pub family_score: i16,
    pub love_score: i16,
    pub spiritual_score: i16,
    pub intellectual_score: i16,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LifeAssessmentListResponse {
    pub assessments: Vec<LifeAssessment>,
    pub total: usize,
}

// ============================================================================
// PROFILE
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateProfileRequest {
    pub height_cm: Option<f64>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
}

// ============================================================================
// STATS QUERY PARAMETERS
// ============================================================================

/// Query parameters shared by stats endpoints: an optional explicit "today".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsParams {
    pub date: Option<NaiveDate>,
}

/// Query parameters for the progress comparison endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressParams {
    pub date: Option<NaiveDate>,
    pub period: Option<String>,
    pub days: Option<String>,
}

/// Query parameters for the body metrics endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyMetricsParams {
    pub date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

// ============================================================================
// STATS RESPONSES
// ============================================================================

/// Daily habit stats document plus the weekly workout count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HabitStatsResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub stats: HabitStats,
    /// Workouts logged in the Monday-to-Sunday week containing `date`.
    pub weekly_workouts: usize,
}

/// Workout count for the calendar week against the configured target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WeeklyWorkoutStatsResponse {
    pub week: WeekWindow,
    pub workout_count: usize,
    pub target: u32,
    pub target_met: bool,
}
