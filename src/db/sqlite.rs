// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite-backed workout record store.
//!
//! The store owns a single connection behind a mutex. The app is built for
//! one interactive user, so the mutex only makes the single-writer model
//! explicit; it does not order read-modify-write sequences across requests.

use crate::db::tables;
use crate::error::{AppError, Result};
use crate::models::{WorkoutInput, WorkoutRecord};
use crate::services::pace::compute_pace;
use crate::time_utils::{local_today, parse_form_date, stamp_for_add};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const IN_MEMORY_PATH: &str = ":memory:";

/// Listing order, applied to date first and id as a tiebreak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn sql(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Workout record store.
pub struct WorkoutStore {
    conn: Mutex<Connection>,
}

impl WorkoutStore {
    /// Open (or create) the database at `path` and ensure the table exists.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: &str) -> Result<Self> {
        let conn = if path == IN_MEMORY_PATH {
            Connection::open_in_memory()
        } else {
            Connection::open(Path::new(path))
        }
        .map_err(|e| AppError::Database(format!("Failed to open {}: {}", path, e)))?;

        let store = Self::from_connection(conn)?;
        tracing::info!(path, "Workout store opened");
        Ok(store)
    }

    /// In-memory store for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(IN_MEMORY_PATH)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                date VARCHAR(250),
                activity_type VARCHAR(100),
                distance FLOAT,
                time VARCHAR(50),
                pace VARCHAR(50),
                calories FLOAT,
                month_year VARCHAR(50)
            );",
            table = tables::WORKOUTS
        ))?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::Internal(anyhow::anyhow!("workout store mutex poisoned")))
    }

    // ─── Write Operations ────────────────────────────────────────

    /// Insert a new workout. A missing or malformed date falls back to today.
    pub fn create(&self, input: &WorkoutInput) -> Result<i64> {
        self.create_on(input, local_today())
    }

    /// Insert a new workout, using `today` as the fallback date.
    pub fn create_on(&self, input: &WorkoutInput, today: NaiveDate) -> Result<i64> {
        let stamp = stamp_for_add(input.date.as_deref(), today);
        let pace = compute_pace(Some(input.distance), Some(input.time.as_str()));

        let conn = self.lock()?;
        conn.execute(
            &format!(
                "INSERT INTO {} (date, activity_type, distance, time, pace, calories, month_year)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                tables::WORKOUTS
            ),
            params![
                stamp.date,
                input.activity_type,
                input.distance,
                input.time,
                pace,
                input.calories,
                stamp.month_year,
            ],
        )?;
        let id = conn.last_insert_rowid();

        tracing::info!(
            id,
            date = %stamp.date,
            activity = %input.activity_type,
            distance = input.distance,
            "Workout created"
        );
        Ok(id)
    }

    /// Replace the editable fields of a workout and re-derive its pace.
    ///
    /// A missing or malformed date leaves the stored date and month untouched.
    pub fn update(&self, id: i64, input: &WorkoutInput) -> Result<WorkoutRecord> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let existing = select_by_id(&tx, id)?.ok_or_else(|| AppError::workout_not_found(id))?;

        let (date, month_year) = match parse_form_date(input.date.as_deref()) {
            Some(stamp) => (Some(stamp.date), Some(stamp.month_year)),
            None => {
                tracing::debug!(id, raw_date = ?input.date, "Keeping stored date on edit");
                (existing.date, existing.month_year)
            }
        };

        let record = WorkoutRecord {
            id,
            date,
            activity_type: Some(input.activity_type.clone()),
            distance: Some(input.distance),
            time: Some(input.time.clone()),
            pace: compute_pace(Some(input.distance), Some(input.time.as_str())),
            calories: Some(input.calories),
            month_year,
        };

        tx.execute(
            &format!(
                "UPDATE {} SET date = ?1, activity_type = ?2, distance = ?3, time = ?4,
                     pace = ?5, calories = ?6, month_year = ?7
                 WHERE id = ?8",
                tables::WORKOUTS
            ),
            params![
                record.date,
                record.activity_type,
                record.distance,
                record.time,
                record.pace,
                record.calories,
                record.month_year,
                id,
            ],
        )?;
        tx.commit()?;

        tracing::info!(id, "Workout updated");
        Ok(record)
    }

    /// Delete a workout.
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", tables::WORKOUTS),
            params![id],
        )?;

        if changed == 0 {
            return Err(AppError::workout_not_found(id));
        }

        tracing::info!(id, "Workout deleted");
        Ok(())
    }

    // ─── Read Operations ─────────────────────────────────────────

    /// Get a workout by id.
    pub fn get(&self, id: i64) -> Result<WorkoutRecord> {
        let conn = self.lock()?;
        select_by_id(&conn, id)?.ok_or_else(|| AppError::workout_not_found(id))
    }

    /// All workouts ordered by calendar date, then id, in the given direction.
    pub fn list_all(&self, order: SortOrder) -> Result<Vec<WorkoutRecord>> {
        let dir = order.sql();
        let sql = format!(
            "SELECT id, date, activity_type, distance, time, pace, calories, month_year
             FROM {table}
             ORDER BY substr(date, 7, 4) {dir}, substr(date, 4, 2) {dir},
                      substr(date, 1, 2) {dir}, id {dir}",
            table = tables::WORKOUTS,
            dir = dir
        );

        let conn = self.lock()?;
        let mut stmt = conn.prepare(&sql)?;
        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!(count = records.len(), ?order, "Listed workouts");
        Ok(records)
    }
}

fn select_by_id(conn: &Connection, id: i64) -> Result<Option<WorkoutRecord>> {
    let record = conn
        .query_row(
            &format!(
                "SELECT id, date, activity_type, distance, time, pace, calories, month_year
                 FROM {} WHERE id = ?1",
                tables::WORKOUTS
            ),
            params![id],
            row_to_record,
        )
        .optional()?;
    Ok(record)
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WorkoutRecord> {
    Ok(WorkoutRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        activity_type: row.get(2)?,
        distance: row.get(3)?,
        time: row.get(4)?,
        pace: row.get(5)?,
        calories: row.get(6)?,
        month_year: row.get(7)?,
    })
}
