// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout record model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub const DEFAULT_ACTIVITY_TYPE: &str = "Running";
pub const DEFAULT_TIME: &str = "00:00:00";

/// Stored workout record.
///
/// Columns are nullable in the table, so rows written by older versions of
/// the app may carry gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutRecord {
    /// Row id, assigned by the store
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: i64,
    /// Workout date (`DD-MM-YYYY`)
    pub date: Option<String>,
    /// Activity label (Running, Cycling, ...)
    pub activity_type: Option<String>,
    /// Distance in kilometers
    pub distance: Option<f64>,
    /// Elapsed time (`HH:MM:SS` or `MM:SS`)
    pub time: Option<String>,
    /// Derived pace (`MM:SS` per km)
    pub pace: Option<String>,
    /// Calories burned
    pub calories: Option<f64>,
    /// Derived month key (`MM-YYYY`)
    pub month_year: Option<String>,
}

/// Raw workout form as posted by the browser.
///
/// Every field is kept as text; parsing happens in [`WorkoutForm::into_input`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutForm {
    pub activity_type: Option<String>,
    pub distance: Option<String>,
    pub time: Option<String>,
    pub calories: Option<String>,
    /// `YYYY-MM-DD` from an HTML date input
    pub date: Option<String>,
}

/// Workout fields after lenient parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutInput {
    pub activity_type: String,
    pub distance: f64,
    pub time: String,
    pub calories: f64,
    /// Unparsed form date; normalized by the store according to add/edit rules.
    pub date: Option<String>,
}

impl Default for WorkoutInput {
    fn default() -> Self {
        Self {
            activity_type: DEFAULT_ACTIVITY_TYPE.to_string(),
            distance: 0.0,
            time: DEFAULT_TIME.to_string(),
            calories: 0.0,
            date: None,
        }
    }
}

impl WorkoutForm {
    /// Apply the silent-default rules: missing activity type and time get
    /// defaults, numbers that fail to parse become 0.
    pub fn into_input(self) -> WorkoutInput {
        WorkoutInput {
            activity_type: self
                .activity_type
                .unwrap_or_else(|| DEFAULT_ACTIVITY_TYPE.to_string()),
            distance: parse_number(self.distance.as_deref()),
            time: self.time.unwrap_or_else(|| DEFAULT_TIME.to_string()),
            calories: parse_number(self.calories.as_deref()),
            date: self.date,
        }
    }
}

/// Lenient float parsing; anything unparseable or non-finite is 0.
fn parse_number(raw: Option<&str>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
