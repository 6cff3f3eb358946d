// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Log: a single-user fitness log.
//!
//! This crate records workouts (date, activity, distance, time, calories),
//! derives pace and month keys, and serves monthly summaries over HTTP.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::WorkoutStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: WorkoutStore,
}
