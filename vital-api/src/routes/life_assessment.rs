//! Life Assessment REST API Routes
//!
//! "Wheel of life" snapshots: eight 1-10 area scores per dated assessment.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::{new_entity_id, LifeAssessment};

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateLifeAssessmentRequest, LifeAssessmentListResponse},
};

fn validate_scores(req: &CreateLifeAssessmentRequest) -> ApiResult<()> {
    let scores = [
        ("health_score", req.health_score),
        ("career_score", req.career_score),
        ("financial_score", req.financial_score),
        ("social_score", req.social_score),
        ("family_score", req.family_score),
        ("love_score", req.love_score),
        ("spiritual_score", req.spiritual_score),
        ("intellectual_score", req.intellectual_score),
    ];
    for (field, score) in scores {
        if !(1..=10).contains(&score) {
            return Err(ApiError::invalid_range(field, 1, 10));
        }
    }
    Ok(())
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/life-assessments - Record an assessment
#[utoipa::path(
    post,
    path = "/api/v1/life-assessments",
    tag = "Life Assessments",
    request_body = CreateLifeAssessmentRequest,
    responses(
        (status = 201, description = "Assessment created", body = LifeAssessment),
        (status = 400, description = "Score out of range", body = ApiError),
    ),
)]
pub async fn create_assessment(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateLifeAssessmentRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_scores(&req)?;

    let assessment = LifeAssessment {
        assessment_id: new_entity_id(),
        user_id: ctx.user_id,
        date: req.date,
        health_score: req.health_score,
        career_score: req.career_score,
        financial_score: req.financial_score,
        social_score: req.social_score,
        family_score: req.family_score,
        love_score: req.love_score,
        spiritual_score: req.spiritual_score,
        intellectual_score: req.intellectual_score,
        notes: req.notes.unwrap_or_default(),
    };
    state.store.assessment_insert(&assessment)?;

    Ok((StatusCode::CREATED, Json(assessment)))
}

/// GET /api/v1/life-assessments - List assessments, newest first
#[utoipa::path(
    get,
    path = "/api/v1/life-assessments",
    tag = "Life Assessments",
    responses(
        (status = 200, description = "Assessments", body = LifeAssessmentListResponse),
    ),
)]
pub async fn list_assessments(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let assessments = state.store.assessment_list(ctx.user_id)?;
    let total = assessments.len();
    Ok(Json(LifeAssessmentListResponse { assessments, total }))
}

/// DELETE /api/v1/life-assessments/{id} - Delete an assessment
#[utoipa::path(
    delete,
    path = "/api/v1/life-assessments/{id}",
    tag = "Life Assessments",
    params(("id" = Uuid, Path, description = "Assessment ID")),
    responses(
        (status = 204, description = "Assessment deleted"),
        (status = 404, description = "Assessment not found", body = ApiError),
    ),
)]
pub async fn delete_assessment(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.assessment_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the life assessment router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_assessments).post(create_assessment))
        .route("/:id", axum::routing::delete(delete_assessment))
        .with_state(state)
}
