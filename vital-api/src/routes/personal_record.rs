//! Personal Record REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::PersonalRecord;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreatePersonalRecordRequest, PersonalRecordListResponse},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/personal-records - Record a new PR entry
#[utoipa::path(
    post,
    path = "/api/v1/personal-records",
    tag = "Personal Records",
    request_body = CreatePersonalRecordRequest,
    responses(
        (status = 201, description = "PR entry created", body = PersonalRecord),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_record(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreatePersonalRecordRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.exercise_name.trim().is_empty() {
        return Err(ApiError::missing_field("exercise_name"));
    }
    if !req.weight_kg.is_finite() || req.weight_kg <= 0.0 {
        return Err(ApiError::invalid_input(
            "weight_kg must be a positive, finite number",
        ));
    }
    let reps = req.reps.unwrap_or(1);
    if reps < 1 {
        return Err(ApiError::invalid_range("reps", 1, i32::MAX));
    }

    // The exact name is the grouping key; only surrounding whitespace is
    // stripped, case stays as given.
    let record = PersonalRecord::new(
        ctx.user_id,
        req.exercise_name.trim(),
        req.weight_kg,
        reps,
        req.date,
    );
    state.store.record_insert(&record)?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/personal-records - List all PR entries
#[utoipa::path(
    get,
    path = "/api/v1/personal-records",
    tag = "Personal Records",
    responses(
        (status = 200, description = "List of PR entries", body = PersonalRecordListResponse),
    ),
)]
pub async fn list_records(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let records = state.store.record_list(ctx.user_id)?;
    let total = records.len();
    Ok(Json(PersonalRecordListResponse { records, total }))
}

/// DELETE /api/v1/personal-records/{id} - Delete a PR entry
#[utoipa::path(
    delete,
    path = "/api/v1/personal-records/{id}",
    tag = "Personal Records",
    params(("id" = Uuid, Path, description = "Record ID")),
    responses(
        (status = 204, description = "PR entry deleted"),
        (status = 404, description = "PR entry not found", body = ApiError),
    ),
)]
pub async fn delete_record(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.record_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the personal record router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id", axum::routing::delete(delete_record))
        .with_state(state)
}
