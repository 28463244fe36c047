//! Error Types for the VITAL API
//!
//! This module defines error handling for the API layer, including:
//! - ApiError struct for structured error responses
//! - ErrorCode enum for categorizing errors
//! - IntoResponse implementation for Axum HTTP responses
//!
//! All errors are serialized as JSON with appropriate HTTP status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use vital_core::{EngineError, EntityKind, StorageError, ValidationError, VitalError};

// ============================================================================
// ERROR CODE ENUM
// ============================================================================

/// Error codes for API responses.
///
/// Each error code maps to a specific HTTP status code and represents
/// a category of error that can occur during API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================================================
    // Validation Errors (400)
    // ========================================================================
    /// Request validation failed
    ValidationFailed,

    /// Request contains invalid input data
    InvalidInput,

    /// Required field is missing from request
    MissingField,

    /// Field value is out of valid range
    InvalidRange,

    /// Field format is incorrect
    InvalidFormat,

    /// Comparison period token or custom day count is malformed
    InvalidPeriod,

    /// Body measurement failed validation (non-positive weight)
    InvalidMeasurement,

    /// The x-user-id header is missing or not a UUID
    MissingUserId,

    // ========================================================================
    // Not Found Errors (404)
    // ========================================================================
    /// Requested entity does not exist
    EntityNotFound,

    /// No profile has been created for this user
    ProfileNotFound,

    // ========================================================================
    // Conflict Errors (409)
    // ========================================================================
    /// Entity with the same identifier already exists
    EntityAlreadyExists,

    /// A habit log for this (habit, day) pair already exists
    DuplicateLog,

    // ========================================================================
    // Server Errors (500, 503)
    // ========================================================================
    /// Internal server error
    InternalError,

    /// Storage operation failed
    StorageError,

    /// Service is temporarily unavailable
    ServiceUnavailable,
}

impl ErrorCode {
    /// Get the HTTP status code for this error code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidInput
            | ErrorCode::MissingField
            | ErrorCode::InvalidRange
            | ErrorCode::InvalidFormat
            | ErrorCode::InvalidPeriod
            | ErrorCode::InvalidMeasurement
            | ErrorCode::MissingUserId => StatusCode::BAD_REQUEST,

            ErrorCode::EntityNotFound | ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,

            ErrorCode::EntityAlreadyExists | ErrorCode::DuplicateLog => StatusCode::CONFLICT,

            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,

            ErrorCode::InternalError | ErrorCode::StorageError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get a default message for this error code.
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Request validation failed",
            ErrorCode::InvalidInput => "Invalid input data",
            ErrorCode::MissingField => "Required field is missing",
            ErrorCode::InvalidRange => "Value is out of valid range",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::InvalidPeriod => "Invalid comparison period",
            ErrorCode::InvalidMeasurement => "Measurement weight must be positive",
            ErrorCode::MissingUserId => "Missing or invalid x-user-id header",
            ErrorCode::EntityNotFound => "Entity not found",
            ErrorCode::ProfileNotFound => "Profile not found",
            ErrorCode::EntityAlreadyExists => "Entity already exists",
            ErrorCode::DuplicateLog => "Habit already logged for this day",
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage operation failed",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ============================================================================
// API ERROR STRUCT
// ============================================================================

/// Structured error response for API operations.
///
/// Returned by all API endpoints when an error occurs; one consistent
/// JSON shape across the whole surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiError {
    /// Error code categorizing the error
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details (field errors, offending values, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a new API error with the given code, using the default message.
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
            details: None,
        }
    }

    /// Add additional details to the error.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        self.code.status_code()
    }

    // ========================================================================
    // Convenience constructors for common errors
    // ========================================================================

    /// Create a ValidationFailed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a MissingField error.
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingField,
            format!("Required field '{}' is missing", field),
        )
    }

    /// Create an InvalidRange error.
    pub fn invalid_range(field: &str, min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("Field '{}' must be between {} and {}", field, min, max),
        )
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(field: &str, expected: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("Field '{}' has invalid format, expected {}", field, expected),
        )
    }

    /// Create an InvalidPeriod error.
    pub fn invalid_period(value: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidPeriod,
            format!("Invalid comparison period: {}", value),
        )
    }

    /// Create a MissingUserId error.
    pub fn missing_user_id() -> Self {
        Self::from_code(ErrorCode::MissingUserId)
    }

    /// Create an EntityNotFound error.
    pub fn entity_not_found(entity_type: &str, id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::EntityNotFound,
            format!("{} with id {} not found", entity_type, id),
        )
    }

    /// Create a ProfileNotFound error.
    pub fn profile_not_found() -> Self {
        Self::from_code(ErrorCode::ProfileNotFound)
    }

    /// Create a DuplicateLog error.
    pub fn duplicate_log(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DuplicateLog, message)
    }

    /// Create an InternalError.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Create a StorageError.
    pub fn storage_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Create a ServiceUnavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// ============================================================================
// AXUM INTEGRATION
// ============================================================================

/// Implement IntoResponse for ApiError to enable automatic error handling in
/// Axum, so handlers can return `Result<Json<T>, ApiError>` directly.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self);
        (status, body).into_response()
    }
}

// ============================================================================
// CONVERSIONS FROM DOMAIN ERRORS
// ============================================================================

fn entity_kind_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Habit => "Habit",
        EntityKind::HabitLog => "HabitLog",
        EntityKind::Workout => "Workout",
        EntityKind::WorkoutTemplate => "WorkoutTemplate",
        EntityKind::Exercise => "Exercise",
        EntityKind::PersonalRecord => "PersonalRecord",
        EntityKind::BodyMeasurement => "BodyMeasurement",
        EntityKind::JournalEntry => "JournalEntry",
        EntityKind::LifeAssessment => "LifeAssessment",
        EntityKind::UserProfile => "UserProfile",
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity_kind, id } => {
                ApiError::entity_not_found(entity_kind_label(entity_kind), id)
            }
            StorageError::Duplicate { entity_kind, reason } => match entity_kind {
                EntityKind::HabitLog => ApiError::duplicate_log(reason),
                _ => ApiError::new(
                    ErrorCode::EntityAlreadyExists,
                    format!("{}: {}", entity_kind_label(entity_kind), reason),
                ),
            },
            StorageError::InsertFailed { .. } | StorageError::UpdateFailed { .. } => {
                tracing::error!(error = %err, "storage write failed");
                ApiError::storage_error("Storage operation failed")
            }
            StorageError::LockPoisoned => {
                tracing::error!("storage lock poisoned");
                ApiError::service_unavailable("Storage temporarily unavailable")
            }
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidPeriod { value } => ApiError::invalid_period(value),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::RequiredFieldMissing { field } => ApiError::missing_field(&field),
            ValidationError::InvalidValue { field, reason } => {
                ApiError::invalid_input(format!("Invalid value for {}: {}", field, reason))
            }
            ValidationError::InvalidMeasurement { weight_kg } => ApiError::new(
                ErrorCode::InvalidMeasurement,
                format!("Measurement weight must be positive, got {}", weight_kg),
            ),
            ValidationError::OutOfRange { field, min, max } => {
                ApiError::invalid_range(&field, min, max)
            }
        }
    }
}

impl From<VitalError> for ApiError {
    fn from(err: VitalError) -> Self {
        match err {
            VitalError::Storage(e) => e.into(),
            VitalError::Engine(e) => e.into(),
            VitalError::Validation(e) => e.into(),
        }
    }
}

/// Convert from serde_json::Error to ApiError.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::invalid_input(format!("Invalid JSON: {}", err))
    }
}

/// Convert from uuid::Error to ApiError.
impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::invalid_format("id", &format!("valid UUID: {}", err))
    }
}

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
