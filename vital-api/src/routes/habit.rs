//! Habit REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::Habit;
use vital_storage::HabitUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateHabitRequest, HabitListResponse, UpdateHabitRequest},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/habits - Create a new habit
#[utoipa::path(
    post,
    path = "/api/v1/habits",
    tag = "Habits",
    request_body = CreateHabitRequest,
    responses(
        (status = 201, description = "Habit created", body = Habit),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_habit(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateHabitRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(ApiError::missing_field("name"));
    }

    let habit = Habit::new(
        ctx.user_id,
        req.name.trim(),
        req.category.as_deref().unwrap_or("general"),
        req.target_frequency.as_deref().unwrap_or("daily"),
    );
    state.store.habit_insert(&habit)?;

    Ok((StatusCode::CREATED, Json(habit)))
}

/// GET /api/v1/habits - List the user's habits
#[utoipa::path(
    get,
    path = "/api/v1/habits",
    tag = "Habits",
    responses(
        (status = 200, description = "List of habits", body = HabitListResponse),
        (status = 400, description = "Missing user header", body = ApiError),
    ),
)]
pub async fn list_habits(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let habits = state.store.habit_list(ctx.user_id)?;
    let total = habits.len();
    Ok(Json(HabitListResponse { habits, total }))
}

/// GET /api/v1/habits/{id} - Get a habit
#[utoipa::path(
    get,
    path = "/api/v1/habits/{id}",
    tag = "Habits",
    params(("id" = Uuid, Path, description = "Habit ID")),
    responses(
        (status = 200, description = "The habit", body = Habit),
        (status = 404, description = "Habit not found", body = ApiError),
    ),
)]
pub async fn get_habit(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let habit = state
        .store
        .habit_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Habit", id))?;
    Ok(Json(habit))
}

/// PUT /api/v1/habits/{id} - Update a habit
#[utoipa::path(
    put,
    path = "/api/v1/habits/{id}",
    tag = "Habits",
    params(("id" = Uuid, Path, description = "Habit ID")),
    request_body = UpdateHabitRequest,
    responses(
        (status = 200, description = "Updated habit", body = Habit),
        (status = 404, description = "Habit not found", body = ApiError),
    ),
)]
pub async fn update_habit(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateHabitRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("Habit name cannot be empty"));
        }
    }

    state.store.habit_update(
        ctx.user_id,
        id,
        HabitUpdate {
            name: req.name,
            category: req.category,
            target_frequency: req.target_frequency,
        },
    )?;

    let habit = state
        .store
        .habit_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Habit", id))?;
    Ok(Json(habit))
}

/// DELETE /api/v1/habits/{id} - Delete a habit and its logs
#[utoipa::path(
    delete,
    path = "/api/v1/habits/{id}",
    tag = "Habits",
    params(("id" = Uuid, Path, description = "Habit ID")),
    responses(
        (status = 204, description = "Habit deleted"),
        (status = 404, description = "Habit not found", body = ApiError),
    ),
)]
pub async fn delete_habit(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.habit_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the habit router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_habits).post(create_habit))
        .route(
            "/:id",
            get(get_habit).put(update_habit).delete(delete_habit),
        )
        .with_state(state)
}
