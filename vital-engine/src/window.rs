//! Week window arithmetic
//!
//! The single home for "this week": every consumer of week boundaries goes
//! through [`WeekWindow::containing`], and the rolling trailing-7-day range
//! used by the streak calculator comes from
//! [`vital_core::DateRange::trailing_days`]. No other module defines week
//! boundaries.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use vital_core::DateRange;

/// Monday-to-Sunday calendar week, inclusive both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WeekWindow {
    /// The Monday of the week.
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub start: NaiveDate,
    /// The Sunday of the week.
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub end: NaiveDate,
}

impl WeekWindow {
    /// The 7-day Monday-to-Sunday span containing `today` (Monday = weekday 0).
    pub fn containing(today: NaiveDate) -> Self {
        let weekday = u64::from(today.weekday().num_days_from_monday());
        let start = today - Days::new(weekday);
        let end = start + Days::new(6);
        Self { start, end }
    }

    /// The window as an inclusive date range for store queries.
    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sunday_maps_to_monday_start() {
        // 2024-03-10 is a Sunday.
        let window = WeekWindow::containing(date(2024, 3, 10));
        assert_eq!(window.start, date(2024, 3, 4));
        assert_eq!(window.end, date(2024, 3, 10));
    }

    #[test]
    fn test_monday_is_its_own_start() {
        let window = WeekWindow::containing(date(2024, 3, 4));
        assert_eq!(window.start, date(2024, 3, 4));
        assert_eq!(window.end, date(2024, 3, 10));
    }

    #[test]
    fn test_window_spans_exactly_seven_days_and_contains_today() {
        let mut day = date(2023, 12, 25);
        for _ in 0..60 {
            let window = WeekWindow::containing(day);
            assert_eq!(window.as_range().len_days(), 7);
            assert!(window.as_range().contains(day));
            assert_eq!(window.start.weekday(), Weekday::Mon);
            assert_eq!(window.end.weekday(), Weekday::Sun);
            day = day + Days::new(1);
        }
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        // 2024-03-01 is a Friday; its week starts in February.
        let window = WeekWindow::containing(date(2024, 3, 1));
        assert_eq!(window.start, date(2024, 2, 26));
        assert_eq!(window.end, date(2024, 3, 3));
    }
}
