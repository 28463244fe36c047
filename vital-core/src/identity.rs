//! Identity types for VITAL entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Entity identifier using UUIDv7 for timestamp-sortable IDs.
/// UUIDv7 embeds a Unix timestamp, making IDs naturally sortable by creation time.
pub type EntityId = Uuid;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

/// Owning user of a record. Every entity belongs to exactly one user.
pub type UserId = Uuid;

/// Habit definition identifier.
pub type HabitId = Uuid;

/// Habit log (daily check-in) identifier.
pub type LogId = Uuid;

/// Workout identifier.
pub type WorkoutId = Uuid;

/// Personal record identifier.
pub type RecordId = Uuid;

/// Body measurement identifier.
pub type MeasurementId = Uuid;

/// Journal entry identifier.
pub type EntryId = Uuid;

/// Exercise library entry identifier.
pub type ExerciseId = Uuid;

/// Workout template identifier.
pub type TemplateId = Uuid;

/// Life assessment identifier.
pub type AssessmentId = Uuid;

/// Generate a new UUIDv7 EntityId (timestamp-sortable).
pub fn new_entity_id() -> EntityId {
    Uuid::now_v7()
}
