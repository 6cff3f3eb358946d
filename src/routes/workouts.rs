// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout routes: list, add, edit, delete.
//!
//! Mutating routes take HTML form posts and redirect back to the list view.

use crate::db::SortOrder;
use crate::error::{AppError, Result};
use crate::models::{MonthlySummary, WorkoutForm, WorkoutRecord};
use crate::AppState;
use axum::{
    extract::{Form, Query, State},
    response::Redirect,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const LIST_VIEW_PATH: &str = "/";

/// Workout routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(LIST_VIEW_PATH, get(list_view))
        .route("/add", post(add_workout))
        .route("/edit", get(get_workout).post(edit_workout))
        .route("/delete", get(delete_workout))
}

/// `?id=` query parameter. Kept as text so a bad id is a 400, not a rejection.
#[derive(Deserialize)]
struct IdQuery {
    id: Option<String>,
}

/// Edit form: the workout fields plus the target id.
#[derive(Deserialize)]
struct EditForm {
    id: Option<String>,
    #[serde(flatten)]
    fields: WorkoutForm,
}

fn parse_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.ok_or_else(|| AppError::BadRequest("Missing 'id' parameter".to_string()))?;
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid 'id' parameter: {}", raw)))
}

// ─── List View ───────────────────────────────────────────────

/// List view response: monthly groups and totals plus the flat record list.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ListViewResponse {
    #[serde(flatten)]
    pub summary: MonthlySummary,
    /// Every record, most recent first (includes undated records)
    pub records: Vec<WorkoutRecord>,
}

/// Get all workouts grouped by month.
async fn list_view(State(state): State<Arc<AppState>>) -> Result<Json<ListViewResponse>> {
    let records = state.store.list_all(SortOrder::Descending)?;
    let summary = MonthlySummary::from_records(&records);

    tracing::debug!(
        records = records.len(),
        months = summary.sorted_months.len(),
        "Rendering list view"
    );

    Ok(Json(ListViewResponse { summary, records }))
}

// ─── Add / Edit / Delete ─────────────────────────────────────

/// Create a workout from the add form.
async fn add_workout(
    State(state): State<Arc<AppState>>,
    Form(form): Form<WorkoutForm>,
) -> Result<Redirect> {
    let input = form.into_input();
    state.store.create(&input)?;
    Ok(Redirect::to(LIST_VIEW_PATH))
}

/// Fetch a workout for the edit form.
async fn get_workout(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Json<WorkoutRecord>> {
    let id = parse_id(params.id.as_deref())?;
    Ok(Json(state.store.get(id)?))
}

/// Apply the edit form.
async fn edit_workout(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EditForm>,
) -> Result<Redirect> {
    let id = parse_id(form.id.as_deref())?;
    state.store.update(id, &form.fields.into_input())?;
    Ok(Redirect::to(LIST_VIEW_PATH))
}

/// Delete a workout.
async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Query(params): Query<IdQuery>,
) -> Result<Redirect> {
    let id = parse_id(params.id.as_deref())?;
    state.store.delete(id)?;
    Ok(Redirect::to(LIST_VIEW_PATH))
}
