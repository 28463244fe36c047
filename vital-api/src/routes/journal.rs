//! Journal REST API Routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use vital_core::JournalEntry;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{CreateJournalEntryRequest, JournalListResponse},
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// POST /api/v1/journal - Write a journal entry
#[utoipa::path(
    post,
    path = "/api/v1/journal",
    tag = "Journal",
    request_body = CreateJournalEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = JournalEntry),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<CreateJournalEntryRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.content.trim().is_empty() {
        return Err(ApiError::missing_field("content"));
    }
    if !(1..=5).contains(&req.mood) {
        return Err(ApiError::invalid_range("mood", 1, 5));
    }

    let entry = JournalEntry::new(ctx.user_id, &req.content, req.mood);
    state.store.journal_insert(&entry)?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/v1/journal - List journal entries, newest first
#[utoipa::path(
    get,
    path = "/api/v1/journal",
    tag = "Journal",
    responses(
        (status = 200, description = "Journal entries", body = JournalListResponse),
    ),
)]
pub async fn list_entries(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let entries = state.store.journal_list(ctx.user_id)?;
    let total = entries.len();
    Ok(Json(JournalListResponse { entries, total }))
}

/// DELETE /api/v1/journal/{id} - Delete a journal entry
#[utoipa::path(
    delete,
    path = "/api/v1/journal/{id}",
    tag = "Journal",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = ApiError),
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    ctx: UserContext,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    state.store.journal_delete(ctx.user_id, id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the journal router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", axum::routing::delete(delete_entry))
        .with_state(state)
}
