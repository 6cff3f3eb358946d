// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout Log API Server
//!
//! Records workouts and serves monthly distance/calorie summaries.

use workout_log::{
    config::Config,
    db::{SortOrder, WorkoutStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Workout Log API");

    // Open the workout store
    let store = WorkoutStore::open(&config.database_path)?;
    log_inventory(&store)?;

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = workout_log::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Log every stored workout once at startup.
fn log_inventory(store: &WorkoutStore) -> Result<(), Box<dyn std::error::Error>> {
    let records = store.list_all(SortOrder::Ascending)?;
    if records.is_empty() {
        tracing::info!("No workout data found in the database");
        return Ok(());
    }

    tracing::info!(count = records.len(), "Loaded workout data");
    for r in &records {
        tracing::info!(
            id = r.id,
            date = ?r.date,
            activity = ?r.activity_type,
            distance_km = ?r.distance,
            time = ?r.time,
            pace = ?r.pace,
            calories = ?r.calories,
            "Workout"
        );
    }
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workout_log=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
