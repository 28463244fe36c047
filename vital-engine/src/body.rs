//! Body metric trend reducer
//!
//! Derives BMI, BMR and muscle percentage per measurement, plus window-level
//! weight and fat deltas. Every derived value degrades to `None` when its
//! profile or measurement inputs are missing; absence is never an error.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use vital_core::{BodyMeasurement, Sex, UserProfile};

use crate::round1;

/// One measurement with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MeasurementPoint {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub muscle_mass_kg: Option<f64>,
    pub fat_percentage: Option<f64>,
    /// `weight / height_m^2`, one decimal; `None` without a positive height.
    pub bmi: Option<f64>,
    /// Harris-Benedict basal metabolic rate in kcal/day, whole number;
    /// `None` unless height, birth date and sex are all on file.
    pub bmr: Option<f64>,
    /// `muscle_mass / weight * 100`, one decimal.
    pub muscle_mass_percentage: Option<f64>,
}

/// Window-level deltas between the oldest and newest sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BodyTrends {
    /// `newest.weight - oldest.weight`; 0 with fewer than two samples.
    pub weight_change_kg: f64,
    /// `newest.fat - oldest.fat`; `None` if either endpoint lacks a reading.
    pub fat_change_percent: Option<f64>,
}

/// Full body metrics document for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BodyMetricsReport {
    /// Samples in chronological order, oldest first.
    pub measurements: Vec<MeasurementPoint>,
    pub trends: BodyTrends,
    /// The newest sample, duplicated for direct access.
    pub latest: Option<MeasurementPoint>,
}

/// Completed years between `birth_date` and `today`, with the month/day
/// correction (a birthday later in the year has not happened yet).
fn age_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

fn bmi(weight_kg: f64, height_cm: Option<f64>) -> Option<f64> {
    let height_cm = height_cm.filter(|h| *h > 0.0)?;
    let height_m = height_cm / 100.0;
    Some(round1(weight_kg / (height_m * height_m)))
}

/// Harris-Benedict BMR with the revised sex-specific coefficients.
fn bmr(weight_kg: f64, profile: &UserProfile, today: NaiveDate) -> Option<f64> {
    let height_cm = profile.height_cm.filter(|h| *h > 0.0)?;
    let birth_date = profile.birth_date?;
    let sex = profile.sex?;
    let age = f64::from(age_years(birth_date, today));

    let raw = match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    };
    Some(raw.round())
}

fn muscle_percentage(measurement: &BodyMeasurement) -> Option<f64> {
    let muscle = measurement.muscle_mass_kg?;
    if measurement.weight_kg > 0.0 {
        Some(round1(muscle / measurement.weight_kg * 100.0))
    } else {
        None
    }
}

fn to_point(
    measurement: &BodyMeasurement,
    profile: Option<&UserProfile>,
    today: NaiveDate,
) -> MeasurementPoint {
    MeasurementPoint {
        date: measurement.date,
        weight_kg: measurement.weight_kg,
        muscle_mass_kg: measurement.muscle_mass_kg,
        fat_percentage: measurement.fat_percentage,
        bmi: bmi(measurement.weight_kg, profile.and_then(|p| p.height_cm)),
        bmr: profile.and_then(|p| bmr(measurement.weight_kg, p, today)),
        muscle_mass_percentage: muscle_percentage(measurement),
    }
}

/// Reduce the most recent measurements into the metrics document.
///
/// `measurements` arrive newest-first, the order the store returns them in;
/// the report presents them chronologically.
pub fn body_metrics(
    measurements: &[BodyMeasurement],
    profile: Option<&UserProfile>,
    today: NaiveDate,
) -> BodyMetricsReport {
    let points: Vec<MeasurementPoint> = measurements
        .iter()
        .rev()
        .map(|m| to_point(m, profile, today))
        .collect();

    let trends = match (points.first(), points.last()) {
        (Some(oldest), Some(newest)) if points.len() >= 2 => BodyTrends {
            weight_change_kg: round1(newest.weight_kg - oldest.weight_kg),
            fat_change_percent: match (newest.fat_percentage, oldest.fat_percentage) {
                (Some(new_fat), Some(old_fat)) => Some(round1(new_fat - old_fat)),
                _ => None,
            },
        },
        _ => BodyTrends {
            weight_change_kg: 0.0,
            fat_change_percent: None,
        },
    };

    let latest = points.last().cloned();
    BodyMetricsReport {
        measurements: points,
        trends,
        latest,
    }
}
