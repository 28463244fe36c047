//! Error types for VITAL operations

use crate::EntityKind;
use thiserror::Error;
use uuid::Uuid;

/// Storage layer errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Entity not found: {entity_kind:?} with id {id}")]
    NotFound { entity_kind: EntityKind, id: Uuid },

    #[error("Insert failed for {entity_kind:?}: {reason}")]
    InsertFailed {
        entity_kind: EntityKind,
        reason: String,
    },

    #[error("Update failed for {entity_kind:?} with id {id}: {reason}")]
    UpdateFailed {
        entity_kind: EntityKind,
        id: Uuid,
        reason: String,
    },

    #[error("Duplicate {entity_kind:?}: {reason}")]
    Duplicate {
        entity_kind: EntityKind,
        reason: String,
    },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Aggregation engine errors.
///
/// The engine favors graceful degradation (null fields) over failure; the
/// single hard-rejection case is a malformed comparison period.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid comparison period: {value}")]
    InvalidPeriod { value: String },
}

/// Validation errors raised on the write path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Invalid measurement: weight must be positive, got {weight_kg}")]
    InvalidMeasurement { weight_kg: f64 },

    #[error("Value for {field} out of range: must be between {min} and {max}")]
    OutOfRange { field: String, min: i32, max: i32 },
}

/// Master error type for all VITAL errors.
#[derive(Debug, Clone, Error)]
pub enum VitalError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for VITAL operations.
pub type VitalResult<T> = Result<T, VitalError>;

// =============================================================================
// TESTS
// =============================================================================
