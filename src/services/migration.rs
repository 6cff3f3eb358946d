// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-off schema migration: add a `month_year` column to an existing
//! workout table and backfill it from the stored `DD-MM-YYYY` dates.
//!
//! This runs against whatever database file the operator points it at and
//! shares nothing with the live [`WorkoutStore`](crate::db::WorkoutStore)
//! except the column layout.

use crate::time_utils::month_key_from_canonical;
use rusqlite::{params, Connection};
use std::path::Path;

const MONTH_YEAR_COLUMN: &str = "month_year";
const LEGACY_COLUMN: &str = "total_cost";

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("Database not found at {0}")]
    DatabaseMissing(String),

    #[error("Invalid table name: {0}")]
    InvalidTable(String),

    #[error("Table {0} does not exist")]
    TableMissing(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Why a row could not be backfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NoDate,
    InvalidDate(String),
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// The column had to be added
    pub column_added: bool,
    /// Rows whose month key was filled in
    pub updated: usize,
    /// Rows left empty, with the reason
    pub skipped: Vec<(i64, SkipReason)>,
    /// The table still carries the old `total_cost` column
    pub legacy_column_present: bool,
}

/// Open the database at `path` (which must already exist) and migrate `table`.
pub fn migrate_file(path: &Path, table: &str) -> Result<MigrationReport, MigrationError> {
    if !path.exists() {
        return Err(MigrationError::DatabaseMissing(path.display().to_string()));
    }
    let mut conn = Connection::open(path)?;
    migrate(&mut conn, table)
}

/// Add and backfill `month_year` on `table`.
///
/// Runs in one transaction: any SQL failure rolls back every change,
/// including the new column.
pub fn migrate(conn: &mut Connection, table: &str) -> Result<MigrationReport, MigrationError> {
    if table.is_empty() || !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(MigrationError::InvalidTable(table.to_string()));
    }

    let tx = conn.transaction()?;
    let mut report = MigrationReport::default();

    let columns = table_columns(&tx, table)?;
    if columns.is_empty() {
        return Err(MigrationError::TableMissing(table.to_string()));
    }
    report.legacy_column_present = columns.iter().any(|c| c == LEGACY_COLUMN);

    if columns.iter().any(|c| c == MONTH_YEAR_COLUMN) {
        tracing::info!(table, "Column month_year already exists, checking for empty values");
    } else {
        tracing::info!(table, "Adding month_year column");
        tx.execute_batch(&format!(
            "ALTER TABLE {} ADD COLUMN {} VARCHAR(50);",
            table, MONTH_YEAR_COLUMN
        ))?;
        report.column_added = true;
    }

    let pending: Vec<(i64, Option<String>)> = {
        let mut stmt = tx.prepare(&format!(
            "SELECT id, date FROM {} WHERE {col} IS NULL OR {col} = '' ORDER BY id",
            table,
            col = MONTH_YEAR_COLUMN
        ))?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<rusqlite::Result<_>>()?
    };

    {
        let mut update = tx.prepare(&format!(
            "UPDATE {} SET {} = ?1 WHERE id = ?2",
            table, MONTH_YEAR_COLUMN
        ))?;

        for (id, date) in pending {
            match date.as_deref().filter(|d| !d.is_empty()) {
                None => {
                    tracing::warn!(id, "No date found");
                    report.skipped.push((id, SkipReason::NoDate));
                }
                Some(date) => match month_key_from_canonical(Some(date)) {
                    Some(month_year) => {
                        update.execute(params![month_year, id])?;
                        tracing::info!(id, date, %month_year, "Backfilled month_year");
                        report.updated += 1;
                    }
                    None => {
                        tracing::warn!(id, date, "Invalid date format");
                        report
                            .skipped
                            .push((id, SkipReason::InvalidDate(date.to_string())));
                    }
                },
            }
        }
    }

    tx.commit()?;
    Ok(report)
}

fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt.query_map([], |row| row.get::<_, String>(1))?;
    names.collect()
}
