//! Period comparison engine
//!
//! Builds two adjacent, non-overlapping windows from a named period token and
//! counts completed habit logs and workouts in each. Month-based spans use
//! calendar-month subtraction (end-of-month clamping), not a fixed 30-day
//! approximation.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use vital_core::{DateRange, EngineError, HabitLog, Period, ProgressQuery, Trend, Workout};

/// Resolved length of a comparison window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Calendar months, relativedelta-style.
    Months(u32),
    /// Explicit day count (custom periods).
    Days(u64),
}

/// The two adjacent comparison windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonWindows {
    pub current: DateRange,
    pub previous: DateRange,
}

/// Counts for one window, with its boundaries echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PeriodWindowStats {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub start: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub end: NaiveDate,
    pub habits_completed: usize,
    pub workouts_completed: usize,
}

/// Relative change between the windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComparisonDelta {
    /// Percent change in completed habits, one decimal.
    pub habits_change_percent: f64,
    /// Percent change in workouts, one decimal.
    pub workouts_change_percent: f64,
    pub habits_trend: Trend,
    pub workouts_trend: Trend,
}

/// Full period comparison document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PeriodComparison {
    pub period: Period,
    pub current_period: PeriodWindowStats,
    pub previous_period: PeriodWindowStats,
    pub comparison: ComparisonDelta,
}

/// Largest accepted custom day count; ten years of days.
pub const MAX_CUSTOM_DAYS: u64 = 3650;

/// Resolve a raw period token and optional raw day count.
///
/// Unknown tokens fall back to the one-month window. A `custom` period with a
/// malformed day count, or one outside `1..=MAX_CUSTOM_DAYS`, fails with
/// [`EngineError::InvalidPeriod`] - never a silent default. A zero count
/// would collapse the previous window onto the current one, and an oversized
/// count would walk off the calendar. A missing day count defaults to 30.
pub fn resolve_period(token: &str, days: Option<&str>) -> Result<(Period, Span), EngineError> {
    match token {
        "custom" => {
            let raw = days.unwrap_or("30");
            let count: u64 = raw.parse().map_err(|_| EngineError::InvalidPeriod {
                value: raw.to_string(),
            })?;
            if count == 0 || count > MAX_CUSTOM_DAYS {
                return Err(EngineError::InvalidPeriod {
                    value: raw.to_string(),
                });
            }
            Ok((Period::Custom, Span::Days(count)))
        }
        "3months" => Ok((Period::ThreeMonths, Span::Months(3))),
        "6months" => Ok((Period::SixMonths, Span::Months(6))),
        "year" => Ok((Period::Year, Span::Months(12))),
        // "month" and anything unrecognized.
        _ => Ok((Period::Month, Span::Months(1))),
    }
}

/// Build the two windows for `today` and `span`:
/// `current = [today - span, today]`,
/// `previous = [current.start - span, current.start - 1 day]`.
pub fn comparison_windows(today: NaiveDate, span: Span) -> ComparisonWindows {
    let current_start = subtract_span(today, span);
    let previous_start = subtract_span(current_start, span);
    ComparisonWindows {
        current: DateRange::new(current_start, today),
        previous: DateRange::new(previous_start, current_start - Days::new(1)),
    }
}

fn subtract_span(date: NaiveDate, span: Span) -> NaiveDate {
    match span {
        // Saturates at the calendar boundary; unreachable for real dates.
        Span::Months(m) => date
            .checked_sub_months(Months::new(m))
            .unwrap_or(NaiveDate::MIN),
        Span::Days(d) => date.checked_sub_days(Days::new(d)).unwrap_or(NaiveDate::MIN),
    }
}

/// Percent change from `previous` to `current`; 0 when `previous` is zero.
fn percent_change(current: usize, previous: usize) -> f64 {
    if previous > 0 {
        (current as f64 - previous as f64) / previous as f64 * 100.0
    } else {
        0.0
    }
}

/// Trend is derived from the raw counts, not the reported percent change:
/// with an empty previous window the change is pinned to 0 but growth from
/// nothing is still `up`.
fn trend_of(current: usize, previous: usize) -> Trend {
    match current.cmp(&previous) {
        std::cmp::Ordering::Greater => Trend::Up,
        std::cmp::Ordering::Less => Trend::Down,
        std::cmp::Ordering::Equal => Trend::Stable,
    }
}

fn window_stats(logs: &[HabitLog], workouts: &[Workout], range: DateRange) -> PeriodWindowStats {
    let habits_completed = logs
        .iter()
        .filter(|log| log.completed && range.contains(log.date))
        .count();
    let workouts_completed = workouts
        .iter()
        .filter(|w| range.contains(w.date()))
        .count();
    PeriodWindowStats {
        start: range.start,
        end: range.end,
        habits_completed,
        workouts_completed,
    }
}

/// Compare the current period against the previous one for a single user's
/// pre-fetched logs and workouts.
pub fn compare_periods(
    logs: &[HabitLog],
    workouts: &[Workout],
    query: &ProgressQuery,
) -> Result<PeriodComparison, EngineError> {
    let (period, span) = resolve_period(&query.period, query.days.as_deref())?;
    let windows = comparison_windows(query.today, span);

    let current_period = window_stats(logs, workouts, windows.current);
    let previous_period = window_stats(logs, workouts, windows.previous);

    let habits_change = percent_change(
        current_period.habits_completed,
        previous_period.habits_completed,
    );
    let workouts_change = percent_change(
        current_period.workouts_completed,
        previous_period.workouts_completed,
    );

    Ok(PeriodComparison {
        period,
        comparison: ComparisonDelta {
            habits_change_percent: crate::round1(habits_change),
            workouts_change_percent: crate::round1(workouts_change),
            habits_trend: trend_of(
                current_period.habits_completed,
                previous_period.habits_completed,
            ),
            workouts_trend: trend_of(
                current_period.workouts_completed,
                previous_period.workouts_completed,
            ),
        },
        current_period,
        previous_period,
    })
}
