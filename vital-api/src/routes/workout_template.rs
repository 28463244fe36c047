//! Workout Template REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::WorkoutTemplate;
use vital_storage::TemplateUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateTemplateRequest, TemplateListResponse, UpdateTemplateRequest},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/templates - Create a workout template
#[utoipa::path(
    post,
    path = "/api/v1/templates",
    tag = "Workout Templates",
    request_body = CreateTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = WorkoutTemplate),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateTemplateRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(ApiError::missing_field("name"));
    }

    let mut template = WorkoutTemplate::new(ctx.user_id, req.name.trim());
    if let Some(exercises) = req.exercises {
        template = template.with_exercises(exercises);
    }
    state.store.template_insert(&template)?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /api/v1/templates - List the user's templates
#[utoipa::path(
    get,
    path = "/api/v1/templates",
    tag = "Workout Templates",
    responses(
        (status = 200, description = "List of templates", body = TemplateListResponse),
    ),
)]
pub async fn list_templates(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let templates = state.store.template_list(ctx.user_id)?;
    let total = templates.len();
    Ok(Json(TemplateListResponse { templates, total }))
}

/// GET /api/v1/templates/{id} - Get a template
#[utoipa::path(
    get,
    path = "/api/v1/templates/{id}",
    tag = "Workout Templates",
    params(("id" = Uuid, Path, description = "Template ID")),
    responses(
        (status = 200, description = "The template", body = WorkoutTemplate),
        (status = 404, description = "Template not found", body = ApiError),
    ),
)]
pub async fn get_template(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let template = state
        .store
        .template_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("WorkoutTemplate", id))?;
    Ok(Json(template))
}

/// PUT /api/v1/templates/{id} - Update a template
#[utoipa::path(
    put,
    path = "/api/v1/templates/{id}",
    tag = "Workout Templates",
    params(("id" = Uuid, Path, description = "Template ID")),
    request_body = UpdateTemplateRequest,
    responses(
        (status = 200, description = "Updated template", body = WorkoutTemplate),
        (status = 404, description = "Template not found", body = ApiError),
    ),
)]
pub async fn update_template(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTemplateRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::invalid_input("Template name cannot be empty"));
        }
    }

    state.store.template_update(
        ctx.user_id,
        id,
        TemplateUpdate {
            name: req.name,
            exercises: req.exercises,
        },
    )?;

    let template = state
        .store
        .template_get(ctx.user_id, id)?
        .ok_or_else(|| ApiError::entity_not_found("WorkoutTemplate", id))?;
    Ok(Json(template))
}

/// DELETE /api/v1/templates/{id} - Delete a template
#[utoipa::path(
    delete,
    path = "/api/v1/templates/{id}",
    tag = "Workout Templates",
    params(("id" = Uuid, Path, description = "Template ID")),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 404, description = "Template not found", body = ApiError),
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.template_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the workout template router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_templates).post(create_template))
        .route(
            "/:id",
            get(get_template)
                .put(update_template)
                .delete(delete_template),
        )
        .with_state(state)
}
