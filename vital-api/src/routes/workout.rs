//! Workout REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use uuid::Uuid;
use vital_core::Workout;
use vital_storage::WorkoutUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutListResponse},
};

fn validate_feeling(feeling: i16) -> ApiResult<()> {
    if (1..=5).contains(&feeling) {
        Ok(())
    } else {
        Err(ApiError::invalid_range("feeling", 1, 5))
    }
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/workouts - Log a training session
#[utoipa::path(
    post,
    path = "/api/v1/workouts",
    tag = "Workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout created", body = Workout),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_workout(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateWorkoutRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.title.trim().is_empty() {
        return Err(ApiError::missing_field("title"));
    }
    if let Some(feeling) = req.feeling {
        validate_feeling(feeling)?;
    }

    let occurred_at = req.occurred_at.unwrap_or_else(Utc::now);
    let mut workout = Workout::new(ctx.user_id, req.title.trim(), occurred_at);
    if let Some(exercises) = req.exercises {
        workout = workout.with_exercises(exercises);
    }
    if let Some(feeling) = req.feeling {
        workout = workout.with_feeling(feeling);
    }
    if let Some(comments) = req.comments {
        workout.comments = comments;
    }
    state.store.workout_insert(&workout)?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /api/v1/workouts - List the user's workouts, newest first
#[utoipa::path(
    get,
    path = "/api/v1/workouts",
    tag = "Workouts",
    responses(
        (status = 200, description = "List of workouts", body = WorkoutListResponse),
    ),
)]
pub async fn list_workouts(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let workouts = state.store.workout_list(ctx.user_id)?;
    let total = workouts.len();
    Ok(Json(WorkoutListResponse { workouts, total }))
}

/// GET /api/v1/workouts/{id} - Get a workout
#[utoipa::path(
    get,
    path = "/api/v1/workouts/{id}",
    tag = "Workouts",
    params(("id" = Uuid, Path, description = "Workout ID")),
    responses(
        (status = 200, description = "The workout", body = Workout),
        (status = 404, description = "Workout not found", body = ApiError),
    ),
)]
pub async fn get_workout(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let workout = state
        .store
        .workout_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Workout", id))?;
    Ok(Json(workout))
}

/// PUT /api/v1/workouts/{id} - Update a workout
#[utoipa::path(
    put,
    path = "/api/v1/workouts/{id}",
    tag = "Workouts",
    params(("id" = Uuid, Path, description = "Workout ID")),
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Updated workout", body = Workout),
        (status = 404, description = "Workout not found", body = ApiError),
    ),
)]
pub async fn update_workout(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(feeling) = req.feeling {
        validate_feeling(feeling)?;
    }

    state.store.workout_update(
        ctx.user_id,
        id,
        WorkoutUpdate {
            title: req.title,
            exercises: req.exercises,
            feeling: req.feeling,
            comments: req.comments,
        },
    )?;

    let workout = state
        .store
        .workout_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("Workout", id))?;
    Ok(Json(workout))
}

/// DELETE /api/v1/workouts/{id} - Delete a workout
#[utoipa::path(
    delete,
    path = "/api/v1/workouts/{id}",
    tag = "Workouts",
    params(("id" = Uuid, Path, description = "Workout ID")),
    responses(
        (status = 204, description = "Workout deleted"),
        (status = 404, description = "Workout not found", body = ApiError),
    ),
)]
pub async fn delete_workout(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.workout_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the workout router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .with_state(state)
}
