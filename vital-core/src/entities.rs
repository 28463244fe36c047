//! Core entity structures
//!
//! Every entity is owned by exactly one user and immutable once logged, apart
//! from the update paths the API exposes. The aggregation engine only reads.

use crate::{
    new_entity_id, AssessmentId, EntryId, ExerciseId, ExerciseType, HabitId, LogId, MeasurementId,
    RecordId, Sex, TemplateId, Timestamp, UserId, WorkoutId,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Habit - a recurring behavior the user tracks daily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Habit {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub habit_id: HabitId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    pub name: String,
    /// Free-form grouping, e.g. "health" or "study".
    pub category: String,
    /// Target cadence description, e.g. "daily" or "3x per week".
    pub target_frequency: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

impl Habit {
    /// Create a new habit owned by `user_id`.
    pub fn new(user_id: UserId, name: &str, category: &str, target_frequency: &str) -> Self {
        Self {
            habit_id: new_entity_id(),
            user_id,
            name: name.to_string(),
            category: category.to_string(),
            target_frequency: target_frequency.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// HabitLog - one daily check-in for a habit.
///
/// Uniqueness invariant: at most one log per (user, habit, calendar day),
/// enforced by the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HabitLog {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub log_id: LogId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub habit_id: HabitId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub completed: bool,
    /// Optional measured quantity, e.g. liters of water.
    pub value: Option<f64>,
}

impl HabitLog {
    /// Create a new log for `habit_id` on `date`.
    pub fn new(user_id: UserId, habit_id: HabitId, date: NaiveDate, completed: bool) -> Self {
        Self {
            log_id: new_entity_id(),
            habit_id,
            user_id,
            date,
            completed,
            value: None,
        }
    }

    /// Attach a measured value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Workout - a logged training session.
///
/// The exercise payload is opaque JSON; only the count and the calendar date
/// of `occurred_at` fall within engine scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Workout {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub workout_id: WorkoutId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    pub title: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub occurred_at: Timestamp,
    /// Exercises with sets, reps and load.
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub exercises: serde_json::Value,
    /// Perceived session quality, 1 (worst) to 5 (best).
    pub feeling: i16,
    pub comments: String,
}

impl Workout {
    /// Create a new workout at `occurred_at`.
    pub fn new(user_id: UserId, title: &str, occurred_at: Timestamp) -> Self {
        Self {
            workout_id: new_entity_id(),
            user_id,
            title: title.to_string(),
            occurred_at,
            exercises: serde_json::Value::Array(Vec::new()),
            feeling: 3,
            comments: String::new(),
        }
    }

    /// Attach the exercise payload.
    pub fn with_exercises(mut self, exercises: serde_json::Value) -> Self {
        self.exercises = exercises;
        self
    }

    /// Set the perceived session quality.
    pub fn with_feeling(mut self, feeling: i16) -> Self {
        self.feeling = feeling;
        self
    }

    /// Calendar date of the session.
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }
}

/// WorkoutTemplate - a reusable workout structure, e.g. "Workout A - Chest".
///
/// The exercise payload mirrors [`Workout::exercises`]: opaque JSON with the
/// planned exercises, sets, reps and load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WorkoutTemplate {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub template_id: TemplateId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub exercises: serde_json::Value,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}

impl WorkoutTemplate {
    /// Create a new template owned by `user_id`.
    pub fn new(user_id: UserId, name: &str) -> Self {
        Self {
            template_id: new_entity_id(),
            user_id,
            name: name.to_string(),
            exercises: serde_json::Value::Array(Vec::new()),
            created_at: Utc::now(),
        }
    }

    /// Attach the planned exercise payload.
    pub fn with_exercises(mut self, exercises: serde_json::Value) -> Self {
        self.exercises = exercises;
        self
    }
}

/// Exercise - one entry in the exercise library.
///
/// An `owner` of `None` marks a standard exercise every user can see; users
/// add their own entries alongside. Uniqueness: one name per owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Exercise {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub exercise_id: ExerciseId,
    /// Owning user, or `None` for a public standard exercise.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "uuid"))]
    pub owner: Option<UserId>,
    pub name: String,
    pub exercise_type: ExerciseType,
    /// Free-form grouping, e.g. "Chest" or "Legs"; empty when unspecified.
    pub muscle_group: String,
}

impl Exercise {
    /// Create a new library entry.
    pub fn new(owner: Option<UserId>, name: &str, exercise_type: ExerciseType) -> Self {
        Self {
            exercise_id: new_entity_id(),
            owner,
            name: name.to_string(),
            exercise_type,
            muscle_group: String::new(),
        }
    }

    /// Set the muscle group label.
    pub fn with_muscle_group(mut self, muscle_group: &str) -> Self {
        self.muscle_group = muscle_group.to_string();
        self
    }

    /// Whether the entry is part of the shared standard library.
    pub fn is_public(&self) -> bool {
        self.owner.is_none()
    }

    /// Whether `user_id` may see this entry: their own rows plus the public
    /// library.
    pub fn visible_to(&self, user_id: UserId) -> bool {
        match self.owner {
            Some(owner) => owner == user_id,
            None => true,
        }
    }
}

/// PersonalRecord - one PR entry for an exercise.
///
/// Multiple entries share an `exercise_name` per user; "best" is the maximum
/// weight per (user, exercise_name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PersonalRecord {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub record_id: RecordId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    /// Exact exercise name, case-sensitive. No normalization is applied.
    pub exercise_name: String,
    pub weight_kg: f64,
    /// Rep count the weight was lifted for (1RM, 3RM, ...).
    pub reps: i32,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
}

impl PersonalRecord {
    /// Create a new PR entry.
    pub fn new(
        user_id: UserId,
        exercise_name: &str,
        weight_kg: f64,
        reps: i32,
        date: NaiveDate,
    ) -> Self {
        Self {
            record_id: new_entity_id(),
            user_id,
            exercise_name: exercise_name.to_string(),
            weight_kg,
            reps,
            date,
        }
    }
}

/// BodyMeasurement - one dated body composition sample.
///
/// Invariant: `weight_kg` is required and strictly positive; the write path
/// rejects anything else. Muscle mass and fat percentage are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BodyMeasurement {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub measurement_id: MeasurementId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub muscle_mass_kg: Option<f64>,
    pub fat_percentage: Option<f64>,
    pub notes: String,
}

impl BodyMeasurement {
    /// Create a new measurement for `date`.
    pub fn new(user_id: UserId, date: NaiveDate, weight_kg: f64) -> Self {
        Self {
            measurement_id: new_entity_id(),
            user_id,
            date,
            weight_kg,
            muscle_mass_kg: None,
            fat_percentage: None,
            notes: String::new(),
        }
    }

    /// Attach muscle mass in kilograms.
    pub fn with_muscle_mass(mut self, muscle_mass_kg: f64) -> Self {
        self.muscle_mass_kg = Some(muscle_mass_kg);
        self
    }

    /// Attach body fat percentage.
    pub fn with_fat_percentage(mut self, fat_percentage: f64) -> Self {
        self.fat_percentage = Some(fat_percentage);
        self
    }
}

/// JournalEntry - a dated free-form journal note with a mood rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct JournalEntry {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub entry_id: EntryId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    pub content: String,
    /// Mood rating, 1 (worst) to 5 (best).
    pub mood: i16,
}

impl JournalEntry {
    /// Create a new journal entry timestamped now.
    pub fn new(user_id: UserId, content: &str, mood: i16) -> Self {
        Self {
            entry_id: new_entity_id(),
            user_id,
            created_at: Utc::now(),
            content: content.to_string(),
            mood,
        }
    }
}

/// LifeAssessment - a "wheel of life" snapshot, eight 1-10 area scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LifeAssessment {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub assessment_id: AssessmentId,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
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
    pub notes: String,
}

/// UserProfile - the Profile collaborator supplying BMI/BMR inputs.
///
/// Every field the derived metrics depend on is optional; absence degrades
/// those metrics to null, never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProfile {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "uuid"))]
    pub user_id: UserId,
    pub height_cm: Option<f64>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = "date"))]
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Create an empty profile for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            height_cm: None,
            birth_date: None,
            sex: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set height in centimeters.
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Set birth date.
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set sex.
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }
}
