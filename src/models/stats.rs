//! Monthly workout aggregates for the list view.
//!
//! Aggregates are recomputed from the full record set on every read; the
//! store has no change notification, so nothing here is cached.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::WorkoutRecord;
use crate::time_utils::parse_month_key;

/// Distance and calorie sums.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Totals {
    /// Kilometers
    pub distance: f64,
    pub calories: f64,
}

impl Totals {
    fn add(&mut self, record: &WorkoutRecord) {
        self.distance += record.distance.unwrap_or(0.0);
        self.calories += record.calories.unwrap_or(0.0);
    }
}

/// Records grouped by month with per-month and overall totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MonthlySummary {
    /// Records per month key (`MM-YYYY`), in input order
    pub monthly_data: BTreeMap<String, Vec<WorkoutRecord>>,
    /// Totals per month key
    pub monthly_totals: BTreeMap<String, Totals>,
    /// Month keys, most recent first
    pub sorted_months: Vec<String>,
    /// Totals across every record, including undated ones
    pub grand_totals: Totals,
}

impl MonthlySummary {
    /// Group records by month key and compute totals.
    ///
    /// Records without a month key only contribute to `grand_totals`.
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        let mut summary = Self::default();

        for record in records {
            summary.grand_totals.add(record);

            let Some(month) = record.month_year.as_deref().filter(|m| !m.is_empty()) else {
                continue;
            };

            summary
                .monthly_data
                .entry(month.to_string())
                .or_default()
                .push(record.clone());
            summary
                .monthly_totals
                .entry(month.to_string())
                .or_default()
                .add(record);
        }

        summary.sorted_months = summary.monthly_data.keys().cloned().collect();
        summary.sorted_months.sort_by(|a, b| newest_month_first(a, b));

        summary
    }
}

/// Calendar order, most recent first. Keys that are not `MM-YYYY` sort last.
fn newest_month_first(a: &str, b: &str) -> Ordering {
    match (parse_month_key(a), parse_month_key(b)) {
        (Some(ka), Some(kb)) => kb.cmp(&ka),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
