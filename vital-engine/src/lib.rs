//! VITAL Engine - Aggregation & Scoring
//!
//! Pure, synchronous reducers over event collections already fetched and
//! scoped to one user by the caller. The engine performs no I/O, reads no
//! clock ("today" is always a parameter), and holds no state: every call is
//! independent and safely parallelizable across users and requests.
//!
//! Each computation is bounded - the streak walk is capped at 365 iterations
//! and windowed aggregations operate over fixed caller-provided event sets.

pub mod body;
pub mod comparison;
pub mod rollup;
pub mod stats;
pub mod window;

pub use body::{body_metrics, BodyMetricsReport, BodyTrends, MeasurementPoint};
pub use comparison::{
    compare_periods, comparison_windows, resolve_period, ComparisonDelta, PeriodComparison,
    PeriodWindowStats, Span, MAX_CUSTOM_DAYS,
};
pub use rollup::{personal_record_rollup, RecordSummary};
pub use stats::{habit_stats, HabitStats, ScoreWeights, STREAK_CAP_DAYS};
pub use window::WeekWindow;

/// Round to one decimal place, matching the wire precision of every derived
/// ratio the engine reports.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::round1;

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        assert_eq!(round1(-0.04), -0.0);
        assert_eq!(round1(100.0), 100.0);
    }
}
