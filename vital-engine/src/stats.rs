//! Streak & score calculator
//!
//! Reduces a user's habit logs and habit count into the daily stats document:
//! completions today and over the trailing week, the consecutive-day streak,
//! and the composite 0-100 score.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use vital_core::{DateRange, HabitLog};

/// Hard ceiling on the streak walk. The search terminates here even when
/// every prior day is completed - a defined ceiling, not a safety valve.
pub const STREAK_CAP_DAYS: u32 = 365;

/// Weighting constants for the composite score.
///
/// The defaults are the empirically tuned values; they are configuration,
/// not law, so alternative weightings can be threaded through without
/// touching the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Multiplier applied to the daily completion rate (percentage points).
    pub completion_weight: f64,
    /// Points granted per streak day.
    pub streak_multiplier: f64,
    /// Ceiling on points earned from the streak.
    pub streak_point_cap: f64,
    /// Ceiling on points earned from weekly consistency. The raw contribution
    /// is `completed_week / 7 * week_point_cap`.
    pub week_point_cap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completion_weight: 0.5,
            streak_multiplier: 2.0,
            streak_point_cap: 30.0,
            week_point_cap: 20.0,
        }
    }
}

/// Per-user habit statistics for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct HabitStats {
    pub total_habits: usize,
    /// Completed logs dated exactly `today`.
    pub completed_today: usize,
    /// Completed logs within `[today - 6, today]`.
    pub completed_week: usize,
    /// Consecutive days ending at `today` with at least one completed log,
    /// capped at [`STREAK_CAP_DAYS`].
    pub streak: u32,
    /// Composite score, integer within [0, 100], truncated not rounded.
    pub score: u8,
    /// `completed_today / total_habits * 100`, one decimal; 0 with no habits.
    pub completion_rate_today: f64,
}

/// Compute habit statistics for `today` from the user's logs.
///
/// `logs` must cover at least `[today - 365, today]` for the streak to be
/// exact; earlier or later logs are ignored. `total_habits` is the user's
/// habit count; the streak is computed independently of it.
pub fn habit_stats(
    logs: &[HabitLog],
    total_habits: usize,
    today: NaiveDate,
    weights: &ScoreWeights,
) -> HabitStats {
    let completed_dates: HashSet<NaiveDate> = logs
        .iter()
        .filter(|log| log.completed)
        .map(|log| log.date)
        .collect();

    let completed_today = logs
        .iter()
        .filter(|log| log.completed && log.date == today)
        .count();

    let week = DateRange::trailing_days(today, 7);
    let completed_week = logs
        .iter()
        .filter(|log| log.completed && week.contains(log.date))
        .count();

    let mut streak = 0u32;
    let mut check_date = today;
    while streak < STREAK_CAP_DAYS && completed_dates.contains(&check_date) {
        streak += 1;
        check_date = check_date - Days::new(1);
    }

    let completion_rate = if total_habits > 0 {
        completed_today as f64 / total_habits as f64 * 100.0
    } else {
        0.0
    };

    let streak_bonus = (f64::from(streak) * weights.streak_multiplier).min(weights.streak_point_cap);
    let week_consistency =
        (completed_week as f64 / 7.0 * weights.week_point_cap).min(weights.week_point_cap);
    let score = (completion_rate * weights.completion_weight + streak_bonus + week_consistency)
        .trunc()
        .min(100.0) as u8;

    HabitStats {
        total_habits,
        completed_today,
        completed_week,
        streak,
        score,
        completion_rate_today: crate::round1(completion_rate),
    }
}
