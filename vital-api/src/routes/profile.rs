//! User Profile REST API Routes
//!
//! The profile supplies the BMI/BMR inputs (height, birth date, sex). PUT is
//! an upsert: the first call creates the profile, later calls patch it.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use vital_core::UserProfile;
use vital_storage::ProfileUpdate;

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::UpdateProfileRequest,
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/v1/profile - The user's profile
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "The profile", body = UserProfile),
        (status = 404, description = "No profile yet", body = ApiError),
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let profile = state
        .store
        .profile_get(ctx.user_id)?
        .ok_or_else(ApiError::profile_not_found)?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile - Create or patch the user's profile
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Stored profile", body = UserProfile),
        (status = 400, description = "Invalid request", body = ApiError),
    ),
)]
pub async fn put_profile(
    State(state): State<AppState>,
    ctx: UserContext,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    if let Some(height_cm) = req.height_cm {
        if height_cm <= 0.0 || !height_cm.is_finite() {
            return Err(ApiError::invalid_input("height_cm must be positive"));
        }
    }

    let profile = state.store.profile_upsert(
        ctx.user_id,
        ProfileUpdate {
            height_cm: req.height_cm,
            birth_date: req.birth_date,
            sex: req.sex,
        },
    )?;
    Ok(Json(profile))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the profile router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_profile).put(put_profile))
        .with_state(state)
}
