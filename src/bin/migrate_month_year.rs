// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Add the `month_year` column to an existing workout database and fill it
//! in from the stored dates. Run once, by hand, after backing up the file.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use workout_log::services::migration::{self, SkipReason};

/// Month-key migration for legacy workout databases
#[derive(Parser)]
#[command(name = "migrate-month-year")]
#[command(about = "Add and backfill the month_year column", long_about = None)]
struct Cli {
    /// SQLite database file to migrate
    #[arg(short, long, value_name = "FILE")]
    database: PathBuf,

    /// Table holding the workout rows
    #[arg(short, long, default_value = "athlete_data")]
    table: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    println!("This will:");
    println!("  1. Add a 'month_year' column to table '{}'", cli.table);
    println!("  2. Populate month_year from existing dates");
    println!("Back up {} before proceeding.", cli.database.display());

    if !cli.database.exists() {
        anyhow::bail!("Database not found at {}", cli.database.display());
    }

    if !cli.yes && !confirm("Proceed with the migration? (y/n): ")? {
        println!("Migration cancelled.");
        return Ok(());
    }

    let report = migration::migrate_file(&cli.database, &cli.table)
        .with_context(|| format!("Migration of {} failed", cli.database.display()))?;

    println!();
    println!("MIGRATION SUMMARY");
    if report.column_added {
        println!("Column 'month_year' added");
    }
    println!("Records updated: {}", report.updated);
    if !report.skipped.is_empty() {
        println!("Records with errors: {}", report.skipped.len());
        for (id, reason) in &report.skipped {
            match reason {
                SkipReason::NoDate => println!("  record {}: no date", id),
                SkipReason::InvalidDate(date) => {
                    println!("  record {}: invalid date format '{}'", id, date)
                }
            }
        }
    }
    if report.legacy_column_present {
        println!(
            "Note: legacy 'total_cost' column is still present. SQLite cannot drop it in place; \
             it is left unused."
        );
    }
    println!("Migration completed.");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
