//! Habit Log REST API Routes
//!
//! One log per (habit, calendar day); a second insert for the same pair is a
//! 409 from the store's uniqueness check.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;
use vital_core::HabitLog;
use vital_storage::HabitLogUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateHabitLogRequest, HabitLogListResponse, StatsParams, UpdateHabitLogRequest},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/habit-logs - Log a habit for a day
#[utoipa::path(
    post,
    path = "/api/v1/habit-logs",
    tag = "Habit Logs",
    request_body = CreateHabitLogRequest,
    responses(
        (status = 201, description = "Log created", body = HabitLog),
        (status = 404, description = "Habit not found", body = ApiError),
        (status = 409, description = "Already logged for this day", body = ApiError),
    ),
)]
pub async fn create_habit_log(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateHabitLogRequest>,
) -> ApiResult<impl IntoResponse> {
    // The habit must exist and belong to the caller.
    state
        .store
        .habit_get(ctx.user_id, req.habit_id)?
        .ok_or_else(|| ApiError::entity_not_found("Habit", req.habit_id))?;

    let mut log = HabitLog::new(ctx.user_id, req.habit_id, req.date, req.completed);
    if let Some(value) = req.value {
        log = log.with_value(value);
    }
    state.store.habit_log_insert(&log)?;

    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/v1/habit-logs/today - The user's logs for one calendar day
#[utoipa::path(
    get,
    path = "/api/v1/habit-logs/today",
    tag = "Habit Logs",
    params(("date" = Option<String>, Query, description = "Day to list, ISO date; defaults to the current UTC date")),
    responses(
        (status = 200, description = "Logs for the day", body = HabitLogListResponse),
    ),
)]
pub async fn list_today_logs(
    State(state): State<AppState>,
    ctx: UserContext,
    Query(params): Query<StatsParams>,
) -> ApiResult<impl IntoResponse> {
    let date = params.date.unwrap_or_else(|| Utc::now().date_naive());
    let logs = state.store.habit_log_list_on(ctx.user_id, date)?;
    let total = logs.len();
    Ok(Json(HabitLogListResponse { logs, total }))
}

/// PUT /api/v1/habit-logs/{id} - Update a log
#[utoipa::path(
    put,
    path = "/api/v1/habit-logs/{id}",
    tag = "Habit Logs",
    params(("id" = Uuid, Path, description = "Log ID")),
    request_body = UpdateHabitLogRequest,
    responses(
        (status = 200, description = "Updated log", body = HabitLog),
        (status = 404, description = "Log not found", body = ApiError),
    ),
)]
pub async fn update_habit_log(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateHabitLogRequest>,
) -> ApiResult<impl IntoResponse> {
    state.store.habit_log_update(
        ctx.user_id,
        id,
        HabitLogUpdate {
            completed: req.completed,
            value: req.value.map(Some),
        },
    )?;

    let log = state
        .store
        .habit_log_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("HabitLog", id))?;
    Ok(Json(log))
}

/// DELETE /api/v1/habit-logs/{id} - Delete a log
#[utoipa::path(
    delete,
    path = "/api/v1/habit-logs/{id}",
    tag = "Habit Logs",
    params(("id" = Uuid, Path, description = "Log ID")),
    responses(
        (status = 204, description = "Log deleted"),
        (status = 404, description = "Log not found", body = ApiError),
    ),
)]
pub async fn delete_habit_log(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.habit_log_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the habit log router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::post(create_habit_log))
        .route("/today", get(list_today_logs))
        .route(
            "/:id",
            axum::routing::put(update_habit_log).delete(delete_habit_log),
        )
        .with_state(state)
}
