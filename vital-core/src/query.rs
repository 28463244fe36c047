//! Typed query parameters for store and engine calls
//!
//! The engine and store never see raw request parameters: the API layer
//! validates into these structs first, so date windows and limits are always
//! well-formed by the time data is fetched.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DateRange {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub start: NaiveDate,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range, normalizing swapped endpoints.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Trailing window of `days` calendar days ending at `end` inclusive,
    /// i.e. `[end - (days - 1), end]`.
    pub fn trailing_days(end: NaiveDate, days: u64) -> Self {
        let start = end - Days::new(days.saturating_sub(1));
        Self { start, end }
    }

    /// Whether `date` falls within the range, inclusive both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar dates covered, inclusive both ends.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Parameters for the progress comparison endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressQuery {
    /// Caller-supplied "today"; the engine has no internal clock.
    pub today: NaiveDate,
    /// Raw period token; the engine resolves it (unknown tokens fall back to
    /// one month, a malformed custom day count is rejected).
    pub period: String,
    /// Raw custom day count, parsed by the engine for the `custom` period.
    pub days: Option<String>,
}
