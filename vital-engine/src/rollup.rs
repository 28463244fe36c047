//! Personal-record rollup
//!
//! Collapses a user's PR entries into one summary per exercise. Grouping is
//! by the exact `exercise_name` string, case-sensitive, no normalization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use vital_core::PersonalRecord;

/// One exercise's rollup: the heaviest lift ever and the latest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecordSummary {
    pub exercise_name: String,
    /// Maximum weight across all entries for the exercise.
    pub best_weight_kg: f64,
    /// Rep count of the most recently inserted entry.
    pub latest_reps: i32,
    /// Date of the most recently inserted entry.
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date"))]
    pub latest_date: NaiveDate,
    pub total_entries: usize,
}

/// Roll up PR entries per exercise, sorted by exercise name.
///
/// "Latest" is the entry with the highest `record_id`. Record ids are UUIDv7,
/// so the maximum id is the most recently inserted entry, independent of the
/// user-supplied `date` field.
pub fn personal_record_rollup(records: &[PersonalRecord]) -> Vec<RecordSummary> {
    let mut groups: HashMap<&str, Vec<&PersonalRecord>> = HashMap::new();
    for record in records {
        groups.entry(&record.exercise_name).or_default().push(record);
    }

    let mut summaries: Vec<RecordSummary> = groups
        .into_iter()
        .map(|(name, entries)| {
            let best_weight_kg = entries
                .iter()
                .map(|r| r.weight_kg)
                .fold(f64::NEG_INFINITY, f64::max);
            let latest = entries
                .iter()
                .max_by_key(|r| r.record_id)
                .copied()
                .unwrap_or(entries[0]);
            RecordSummary {
                exercise_name: name.to_string(),
                best_weight_kg,
                latest_reps: latest.reps,
                latest_date: latest.date,
                total_entries: entries.len(),
            }
        })
        .collect();

    summaries.sort_by(|a, b| a.exercise_name.cmp(&b.exercise_name));
    summaries
}
