//! Body Measurement REST API Routes
//!
//! The write path enforces the measurement invariant: weight is required and
//! strictly positive. Everything else about a sample is optional.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::{BodyMeasurement, ValidationError};

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateMeasurementRequest, MeasurementListResponse},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/measurements - Record a body measurement
#[utoipa::path(
    post,
    path = "/api/v1/measurements",
    tag = "Measurements",
    request_body = CreateMeasurementRequest,
    responses(
        (status = 201, description = "Measurement created", body = BodyMeasurement),
        (status = 400, description = "Non-positive weight", body = ApiError),
    ),
)]
pub async fn create_measurement(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateMeasurementRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.weight_kg <= 0.0 || !req.weight_kg.is_finite() {
        return Err(ValidationError::InvalidMeasurement {
            weight_kg: req.weight_kg,
        }
        .into());
    }

    let mut measurement = BodyMeasurement::new(ctx.user_id, req.date, req.weight_kg);
    if let Some(muscle_mass_kg) = req.muscle_mass_kg {
        measurement = measurement.with_muscle_mass(muscle_mass_kg);
    }
    if let Some(fat_percentage) = req.fat_percentage {
        measurement = measurement.with_fat_percentage(fat_percentage);
    }
    if let Some(notes) = req.notes {
        measurement.notes = notes;
    }
    state.store.measurement_insert(&measurement)?;

    Ok((StatusCode::CREATED, Json(measurement)))
}

/// GET /api/v1/measurements - Recent measurements, newest first
#[utoipa::path(
    get,
    path = "/api/v1/measurements",
    tag = "Measurements",
    responses(
        (status = 200, description = "Recent measurements", body = MeasurementListResponse),
    ),
)]
pub async fn list_measurements(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let measurements = state
        .store
        .measurement_list_recent(ctx.user_id, usize::MAX)?;
    let total = measurements.len();
    Ok(Json(MeasurementListResponse {
        measurements,
        total,
    }))
}

/// DELETE /api/v1/measurements/{id} - Delete a measurement
#[utoipa::path(
    delete,
    path = "/api/v1/measurements/{id}",
    tag = "Measurements",
    params(("id" = Uuid, Path, description = "Measurement ID")),
    responses(
        (status = 204, description = "Measurement deleted"),
        (status = 404, description = "Measurement not found", body = ApiError),
    ),
)]
pub async fn delete_measurement(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.measurement_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the measurement router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_measurements).post(create_measurement))
        .route("/:id", axum::routing::delete(delete_measurement))
        .with_state(state)
}
