//! Shared enums for VITAL entities and engine results

use serde::{Deserialize, Serialize};

/// Entity type discriminator for error reporting and storage diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum EntityKind {
    Habit,
    HabitLog,
    Workout,
    WorkoutTemplate,
    Exercise,
    PersonalRecord,
    BodyMeasurement,
    JournalEntry,
    LifeAssessment,
    UserProfile,
}

/// How an exercise is measured in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Load and reps.
    Strength,
    /// Time and distance.
    Cardio,
    /// Reps or time, no external load.
    Calisthenics,
}

/// Biological sex, used for the sex-specific BMR coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Direction of a period-over-period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Named comparison period for progress aggregation.
///
/// Spans are calendar-month multiples except `Custom`, which carries an
/// explicit day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    Year,
    Custom,
}

impl Period {
    /// Span in calendar months for the non-custom periods.
    pub fn months(&self) -> Option<u32> {
        match self {
            Period::Month => Some(1),
            Period::ThreeMonths => Some(3),
            Period::SixMonths => Some(6),
            Period::Year => Some(12),
            Period::Custom => None,
        }
    }

    /// Wire token as accepted by the progress endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Month => "month",
            Period::ThreeMonths => "3months",
            Period::SixMonths => "6months",
            Period::Year => "year",
            Period::Custom => "custom",
        }
    }
}
