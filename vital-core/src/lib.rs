//! VITAL Core - Entity Types
//!
//! Pure data structures with no behavior beyond constructors. All other crates
//! depend on this. This crate contains ONLY data types - no business logic.

pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod query;

pub use entities::{
    BodyMeasurement, Exercise, Habit, HabitLog, JournalEntry, LifeAssessment, PersonalRecord,
    UserProfile, Workout, WorkoutTemplate,
};
pub use enums::{EntityKind, ExerciseType, Period, Sex, Trend};
pub use error::{EngineError, StorageError, ValidationError, VitalError, VitalResult};
pub use identity::{
    new_entity_id, AssessmentId, EntityId, EntryId, ExerciseId, HabitId, LogId, MeasurementId,
    RecordId, TemplateId, Timestamp, UserId, WorkoutId,
};
pub use query::{DateRange, ProgressQuery};
