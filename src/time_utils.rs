// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for workout date normalization.
//!
//! Dates arrive from the browser date picker as `YYYY-MM-DD` and are stored
//! as `DD-MM-YYYY`, with a derived `MM-YYYY` month key used for grouping.

use chrono::NaiveDate;

const FORM_DATE_FORMAT: &str = "%Y-%m-%d";
const CANONICAL_DATE_FORMAT: &str = "%d-%m-%Y";
const MONTH_KEY_FORMAT: &str = "%m-%Y";

/// A canonical workout date together with its month key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
    /// `DD-MM-YYYY`
    pub date: String,
    /// `MM-YYYY`
    pub month_year: String,
}

impl DateStamp {
    /// Stamp for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            date: date.format(CANONICAL_DATE_FORMAT).to_string(),
            month_year: date.format(MONTH_KEY_FORMAT).to_string(),
        }
    }
}

/// Parse a `YYYY-MM-DD` form date. Empty or malformed input yields `None`.
pub fn parse_form_date(raw: Option<&str>) -> Option<DateStamp> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, FORM_DATE_FORMAT)
        .ok()
        .map(DateStamp::from_date)
}

/// Date stamp for a new record: the form date, or `today` when the form
/// date is missing or malformed.
pub fn stamp_for_add(raw: Option<&str>, today: NaiveDate) -> DateStamp {
    parse_form_date(raw).unwrap_or_else(|| DateStamp::from_date(today))
}

/// Extract `MM-YYYY` from a canonical `DD-MM-YYYY` date.
pub fn month_key_from_canonical(date: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = date?.split('-').collect();
    match parts.as_slice() {
        [_, month, year] => Some(format!("{}-{}", month, year)),
        _ => None,
    }
}

/// Parse a `MM-YYYY` month key into a sortable `(year, month)` pair.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (month, year) = key.split_once('-')?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Today's date on the local clock.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
