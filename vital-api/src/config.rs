//! API Configuration Module
//!
//! Configuration for CORS and stats defaults, loaded from environment
//! variables with sensible defaults for development.

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS and stats defaults.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,

    /// Weekly workout target reported by the weekly stats endpoint.
    pub weekly_workout_target: u32,

    /// Default number of measurements in the body metrics report when the
    /// request does not pass `limit`.
    pub body_metrics_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            cors_max_age_secs: 86400,
            weekly_workout_target: 5,
            body_metrics_limit: 12,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `VITAL_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `VITAL_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    /// - `VITAL_WEEKLY_WORKOUT_TARGET`: Weekly workout goal (default: 5)
    /// - `VITAL_BODY_METRICS_LIMIT`: Default measurement window size (default: 12)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cors_origins = std::env::var("VITAL_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("VITAL_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.cors_max_age_secs);

        let weekly_workout_target = std::env::var("VITAL_WEEKLY_WORKOUT_TARGET")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.weekly_workout_target);

        let body_metrics_limit = std::env::var("VITAL_BODY_METRICS_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.body_metrics_limit);

        Self {
            cors_origins,
            cors_max_age_secs,
            weekly_workout_target,
            body_metrics_limit,
        }
    }

    /// Check if running in production mode (strict CORS).
    pub fn is_production(&self) -> bool {
        !self.cors_origins.is_empty()
    }
}
