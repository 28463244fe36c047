//! Statistics REST API Routes
//!
//! Read-only endpoints backed by the aggregation engine. Every handler
//! resolves "today" once (from the optional `date` query parameter, falling
//! back to the current UTC date), fetches the user's events from the store,
//! and hands both to the pure engine functions.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use vital_core::{DateRange, ProgressQuery};
use vital_engine::{
    body_metrics, compare_periods, comparison_windows, habit_stats, personal_record_rollup,
    resolve_period, BodyMetricsReport, PeriodComparison, RecordSummary, ScoreWeights, WeekWindow,
    STREAK_CAP_DAYS,
};

use crate::{
    context::UserContext,
    error::{ApiError, ApiResult},
    state::AppState,
    types::{
        BodyMetricsParams, HabitStatsResponse, ProgressParams, StatsParams,
        WeeklyWorkoutStatsResponse,
    },
};

fn resolve_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/v1/stats/habits - Daily habit stats document
#[utoipa::path(
    get,
    path = "/api/v1/stats/habits",
    tag = "Stats",
    params(("date" = Option<String>, Query, description = "\"Today\" as ISO date; defaults to current UTC date")),
    responses(
        (status = 200, description = "Habit stats", body = HabitStatsResponse),
    ),
)]
pub async fn habit_stats_handler(
    State(state): State<AppState>,
    ctx: UserContext,
    Query(params): Query<StatsParams>,
) -> ApiResult<impl IntoResponse> {
    let today = resolve_today(params.date);

    // The streak walk looks back up to the cap, so fetch one day more than
    // the cap to make the capped case exact.
    let window = DateRange::trailing_days(today, u64::from(STREAK_CAP_DAYS) + 1);
    let logs = state.store.habit_log_list_in_range(ctx.user_id, window)?;
    let total_habits = state.store.habit_count(ctx.user_id)?;
    let stats = habit_stats(&logs, total_habits, today, &ScoreWeights::default());

    let week = WeekWindow::containing(today);
    let weekly_workouts = state
        .store
        .workout_list_in_range(ctx.user_id, week.as_range())?
        .len();

    Ok(Json(HabitStatsResponse {
        date: today,
        stats,
        weekly_workouts,
    }))
}

/// GET /api/v1/stats/workouts/weekly - This week's workout count vs target
#[utoipa::path(
    get,
    path = "/api/v1/stats/workouts/weekly",
    tag = "Stats",
    params(("date" = Option<String>, Query, description = "\"Today\" as ISO date; defaults to current UTC date")),
    responses(
        (status = 200, description = "Weekly workout stats", body = WeeklyWorkoutStatsResponse),
    ),
)]
pub async fn weekly_workouts_handler(
    State(state): State<AppState>,
    ctx: UserContext,
    Query(params): Query<StatsParams>,
) -> ApiResult<impl IntoResponse> {
    let today = resolve_today(params.date);
    let week = WeekWindow::containing(today);
    let workout_count = state
        .store
        .workout_list_in_range(ctx.user_id, week.as_range())?
        .len();
    let target = state.config.weekly_workout_target;

    Ok(Json(WeeklyWorkoutStatsResponse {
        week,
        workout_count,
        target,
        target_met: workout_count >= target as usize,
    }))
}

/// GET /api/v1/stats/progress - Period-over-period comparison
#[utoipa::path(
    get,
    path = "/api/v1/stats/progress",
    tag = "Stats",
    params(
        ("period" = Option<String>, Query, description = "month | 3months | 6months | year | custom"),
        ("days" = Option<String>, Query, description = "Day count for the custom period"),
        ("date" = Option<String>, Query, description = "\"Today\" as ISO date; defaults to current UTC date"),
    ),
    responses(
        (status = 200, description = "Comparison document", body = PeriodComparison),
        (status = 400, description = "Malformed custom period", body = ApiError),
    ),
)]
pub async fn progress_handler(
    State(state): State<AppState>,
    ctx: UserContext,
    Query(params): Query<ProgressParams>,
) -> ApiResult<impl IntoResponse> {
    let today = resolve_today(params.date);
    let period = params.period.unwrap_or_else(|| "month".to_string());

    // Resolve the windows first so the store fetch covers exactly the span
    // the comparison needs.
    let (_, span) = resolve_period(&period, params.days.as_deref()).map_err(ApiError::from)?;
    let windows = comparison_windows(today, span);
    let fetch_range = DateRange::new(windows.previous.start, today);

    let logs = state
        .store
        .habit_log_list_in_range(ctx.user_id, fetch_range)?;
    let workouts = state.store.workout_list_in_range(ctx.user_id, fetch_range)?;

    let query = ProgressQuery {
        today,
        period,
        days: params.days,
    };
    let comparison = compare_periods(&logs, &workouts, &query).map_err(ApiError::from)?;
    Ok(Json(comparison))
}

/// GET /api/v1/stats/personal-records - Per-exercise PR rollup
#[utoipa::path(
    get,
    path = "/api/v1/stats/personal-records",
    tag = "Stats",
    responses(
        (status = 200, description = "PR rollup, one row per exercise", body = [RecordSummary]),
    ),
)]
pub async fn personal_records_handler(
    State(state): State<AppState>,
    ctx: UserContext,
) -> ApiResult<impl IntoResponse> {
    let records = state.store.record_list(ctx.user_id)?;
    Ok(Json(personal_record_rollup(&records)))
}

/// GET /api/v1/stats/body-metrics - Body metrics with derived trends
#[utoipa::path(
    get,
    path = "/api/v1/stats/body-metrics",
    tag = "Stats",
    params(
        ("limit" = Option<usize>, Query, description = "How many recent measurements to include"),
        ("date" = Option<String>, Query, description = "\"Today\" as ISO date; defaults to current UTC date"),
    ),
    responses(
        (status = 200, description = "Body metrics report", body = BodyMetricsReport),
    ),
)]
pub async fn body_metrics_handler(
    State(state): State<AppState>,
    ctx: UserContext,
    Query(params): Query<BodyMetricsParams>,
) -> ApiResult<impl IntoResponse> {
    let today = resolve_today(params.date);
    let limit = params.limit.unwrap_or(state.config.body_metrics_limit);

    let measurements = state.store.measurement_list_recent(ctx.user_id, limit)?;
    let profile = state.store.profile_get(ctx.user_id)?;

    Ok(Json(body_metrics(&measurements, profile.as_ref(), today)))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Build the stats router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/habits", get(habit_stats_handler))
        .route("/workouts/weekly", get(weekly_workouts_handler))
        .route("/progress", get(progress_handler))
        .route("/personal-records", get(personal_records_handler))
        .route("/body-metrics", get(body_metrics_handler))
        .with_state(state)
}
