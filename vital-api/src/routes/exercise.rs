//! Exercise Library REST API Routes
//!
//! Listings mix the user's own entries with the public standard library.
//! Mutations are owner-only; a public exercise cannot be edited or deleted
//! through the API, only shadowed by a user's own entry.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::{Exercise, ExerciseType};
use vital_storage::ExerciseUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateExerciseRequest, ExerciseListResponse, UpdateExerciseRequest},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/exercises - Add an exercise to the user's library
#[utoipa::path(
    post,
    path = "/api/v1/exercises",
    tag = "Exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 201, description = "Exercise created", body = Exercise),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 409, description = "Name already in the user's library", body = ApiError),
    ),
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateExerciseRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(ApiError::missing_field("name"));
    }

    let exercise_type = req.exercise_type.unwrap_or(ExerciseType::Strength);
    let mut exercise = Exercise::new(Some(ctx.user_id), req.name.trim(), exercise_type);
    if let Some(muscle_group) = req.muscle_group {
        exercise = exercise.with_muscle_group(muscle_group.trim());
    }
    state.store.exercise_insert(&exercise)?;

    Ok((StatusCode::CREATED, Json(exercise)))
}

/// GET /api/v1/exercises - List the user's library plus the standard set
#[utoipa::path(
    get,
    path = "/api/v1/exercises",
    tag = "Exercises",
    responses(
        (status = 200, description = "Visible exercises, sorted by name", body = ExerciseListResponse),
    ),
)]
pub async fn list_exercises(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let exercises = state.store.exercise_list(ctx.user_id)?;
    let total = exercises.len();
    Ok(Json(ExerciseListResponse { exercises, total }))
}

/// GET /api/v1/exercises/{id} - Get a visible exercise
#[utoipa::path(
    get,
    path = "/api/v1/exercises/{id}",
    tag = "Exercises",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    responses(
        (status = 200, description = "The exercise", body = Exercise),
        (status = 404, description = "Exercise not found", body = ApiError),
    ),
)]
pub async fn get_exercise(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let exercise = state
        .store
        .exercise_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Exercise", id))?;
    Ok(Json(exercise))
}

/// PUT /api/v1/exercises/{id} - Update an owned exercise
#[utoipa::path(
    put,
    path = "/api/v1/exercises/{id}",
    tag = "Exercises",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    request_body = UpdateExerciseRequest,
    responses(
        (status = 200, description = "Updated exercise", body = Exercise),
        (status = 404, description = "Exercise not found or not owned", body = ApiError),
    ),
)]
pub async fn update_exercise(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExerciseRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("Exercise name cannot be empty"));
        }
    }

    state.store.exercise_update(
        ctx.user_id,
        id,
        ExerciseUpdate {
            name: req.name,
            exercise_type: req.exercise_type,
            muscle_group: req.muscle_group,
        },
    )?;

    let exercise = state
        .store
        .exercise_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Exercise", id))?;
    Ok(Json(exercise))
}

/// DELETE /api/v1/exercises/{id} - Delete an owned exercise
#[utoipa::path(
    delete,
    path = "/api/v1/exercises/{id}",
    tag = "Exercises",
    params(("id" = Uuid, Path, description = "Exercise ID")),
    responses(
        (status = 204, description = "Exercise deleted"),
        (status = 404, description = "Exercise not found or not owned", body = ApiError),
    ),
)]
pub async fn delete_exercise(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.exercise_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the exercise library router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route(
            "/:id",
            get(get_exercise)
                .put(update_exercise)
                .delete(delete_exercise),
        )
        .with_state(state)
}
