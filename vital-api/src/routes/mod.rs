//! REST API Routes Module
//!
//! Route handlers organized by entity type, plus the stats endpoints that
//! front the aggregation engine.
//!
//! Includes:
//! - Entity CRUD routes (habits, logs, workouts, records, measurements, ...)
//! - Derived read models under /api/v1/stats/*
//! - Health check endpoints (Kubernetes-compatible)
//! - CORS support for browser-based clients

pub mod exercise;
pub mod habit;
pub mod habit_log;
pub mod health;
pub mod journal;
pub mod life_assessment;
pub mod measurement;
pub mod personal_record;
pub mod profile;
pub mod stats;
pub mod workout;
pub mod workout_template;

use std::time::Duration;

use axum::{
    http::{header, header::HeaderName, HeaderValue, Method},
    Router,
};
#[cfg(not(feature = "swagger-ui"))]
use axum::{response::IntoResponse, routing::get, Json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use crate::state::{AppState, SharedStore};

// Re-export route creation functions for convenience
pub use exercise::create_router as exercise_router;
pub use habit::create_router as habit_router;
pub use habit_log::create_router as habit_log_router;
pub use health::create_router as health_router;
pub use journal::create_router as journal_router;
pub use life_assessment::create_router as life_assessment_router;
pub use measurement::create_router as measurement_router;
pub use personal_record::create_router as personal_record_router;
pub use profile::create_router as profile_router;
pub use stats::create_router as stats_router;
pub use workout::create_router as workout_router;
pub use workout_template::create_router as workout_template_router;

// ============================================================================
// OPENAPI ENDPOINTS
// ============================================================================

/// Handler for /openapi.json endpoint.
#[cfg(not(feature = "swagger-ui"))]
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Build the entity and stats routes mounted under /api/v1.
fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .nest("/habits", habit::create_router(state.clone()))
        .nest("/habit-logs", habit_log::create_router(state.clone()))
        .nest("/workouts", workout::create_router(state.clone()))
        .nest(
            "/templates",
            workout_template::create_router(state.clone()),
        )
        .nest("/exercises", exercise::create_router(state.clone()))
        .nest(
            "/personal-records",
            personal_record::create_router(state.clone()),
        )
        .nest("/measurements", measurement::create_router(state.clone()))
        .nest("/journal", journal::create_router(state.clone()))
        .nest(
            "/life-assessments",
            life_assessment::create_router(state.clone()),
        )
        .nest("/profile", profile::create_router(state.clone()))
        .nest("/stats", stats::create_router(state))
}

/// Create the complete API router.
///
/// - All REST API routes under /api/v1/* (require the `x-user-id` header)
/// - Health checks at /health/* (public)
/// - OpenAPI spec at /openapi.json
/// - Swagger UI at /swagger-ui (when the swagger-ui feature is enabled)
pub fn create_api_router(store: SharedStore, config: ApiConfig) -> Router {
    let state = AppState::new(store, config.clone());

    let router = Router::new()
        .nest("/api/v1", build_api_routes(state.clone()))
        .nest("/health", health::create_router(state));

    // With the swagger-ui feature, SwaggerUi registers /openapi.json itself;
    // registering it here as well would panic with an overlapping-route error.
    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route("/openapi.json", get(openapi_json));

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa_swagger_ui::SwaggerUi;
        router.merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
    };

    let cors = build_cors_layer(&config);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(crate::context::USER_ID_HEADER),
        ])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}
