// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end tests for the add / edit / delete / list routes.

use axum::http::{header, StatusCode};
use tower::ServiceExt;
use workout_log::db::SortOrder;

mod common;

#[tokio::test]
async fn test_health() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(common::get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_add_redirects_and_stores_derived_fields() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::form_post(
            "/add",
            "activity_type=Running&distance=5&time=00%3A25%3A00&calories=320&date=2024-03-15",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

    let records = state.store.list_all(SortOrder::Ascending).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.date.as_deref(), Some("15-03-2024"));
    assert_eq!(record.month_year.as_deref(), Some("03-2024"));
    assert_eq!(record.pace.as_deref(), Some("05:00"));
    assert_eq!(record.calories, Some(320.0));
}

#[tokio::test]
async fn test_add_with_garbage_fields_uses_defaults() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(common::form_post("/add", "distance=far&calories=lots&date=someday"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let record = state.store.list_all(SortOrder::Ascending).unwrap().remove(0);
    assert_eq!(record.activity_type.as_deref(), Some("Running"));
    assert_eq!(record.distance, Some(0.0));
    assert_eq!(record.calories, Some(0.0));
    assert_eq!(record.time.as_deref(), Some("00:00:00"));
    assert_eq!(record.pace, None);
    // Falls back to today's date
    assert!(record.date.is_some());
    assert!(record.month_year.is_some());
}

#[tokio::test]
async fn test_edit_fetch_returns_record() {
    let (app, state) = common::create_test_app();
    let id = state
        .store
        .create(&workout_log::models::WorkoutInput {
            activity_type: "Cycling".to_string(),
            distance: 20.0,
            time: "1:00:00".to_string(),
            calories: 600.0,
            date: Some("2024-05-01".to_string()),
        })
        .unwrap();

    let response = app
        .oneshot(common::get(&format!("/edit?id={}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["activity_type"], "Cycling");
    assert_eq!(body["date"], "01-05-2024");
    assert_eq!(body["pace"], "03:00");
    assert_eq!(body["month_year"], "05-2024");
}

#[tokio::test]
async fn test_edit_apply_updates_record() {
    let (app, state) = common::create_test_app();
    let id = state
        .store
        .create(&workout_log::models::WorkoutInput {
            date: Some("2024-05-01".to_string()),
            distance: 5.0,
            time: "25:00".to_string(),
            ..Default::default()
        })
        .unwrap();

    let response = app
        .oneshot(common::form_post(
            "/edit",
            &format!(
                "id={}&activity_type=Walking&distance=4&time=48%3A00&calories=150&date=",
                id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let record = state.store.get(id).unwrap();
    assert_eq!(record.activity_type.as_deref(), Some("Walking"));
    assert_eq!(record.pace.as_deref(), Some("12:00"));
    assert_eq!(record.calories, Some(150.0));
    // Empty date keeps the stored one
    assert_eq!(record.date.as_deref(), Some("01-05-2024"));
    assert_eq!(record.month_year.as_deref(), Some("05-2024"));
}

#[tokio::test]
async fn test_missing_records_are_404() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/edit?id=999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = common::json_body(response).await;
    assert_eq!(body["error"], "not_found");

    let response = app
        .clone()
        .oneshot(common::form_post("/edit", "id=999&distance=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(common::get("/delete?id=999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_ids_are_400() {
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/edit?id=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app.oneshot(common::get("/delete")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let (app, state) = common::create_test_app();
    let id = state
        .store
        .create(&workout_log::models::WorkoutInput::default())
        .unwrap();

    let response = app
        .oneshot(common::get(&format!("/delete?id={}", id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(state.store.get(id).is_err());
}

#[tokio::test]
async fn test_list_view_groups_by_month() {
    let (app, state) = common::create_test_app();
    let add = |date: Option<&str>, distance: f64, calories: f64| {
        state
            .store
            .create(&workout_log::models::WorkoutInput {
                distance,
                calories,
                time: "30:00".to_string(),
                date: date.map(String::from),
                ..Default::default()
            })
            .unwrap()
    };
    add(Some("2024-01-03"), 5.0, 300.0);
    add(Some("2024-01-20"), 3.0, 180.0);
    add(Some("2024-02-11"), 10.0, 700.0);

    let response = app.oneshot(common::get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::json_body(response).await;
    assert_eq!(body["sorted_months"], serde_json::json!(["02-2024", "01-2024"]));
    assert_eq!(body["monthly_totals"]["01-2024"]["distance"], 8.0);
    assert_eq!(body["monthly_totals"]["01-2024"]["calories"], 480.0);
    assert_eq!(body["monthly_totals"]["02-2024"]["distance"], 10.0);
    assert_eq!(body["grand_totals"]["distance"], 18.0);
    assert_eq!(body["grand_totals"]["calories"], 1180.0);
    assert_eq!(body["monthly_data"]["01-2024"].as_array().unwrap().len(), 2);
    // Most recent first
    assert_eq!(body["records"][0]["date"], "11-02-2024");
    assert_eq!(body["records"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_view_is_idempotent() {
    let (app, state) = common::create_test_app();
    state
        .store
        .create(&workout_log::models::WorkoutInput {
            distance: 7.0,
            date: Some("2023-12-24".to_string()),
            ..Default::default()
        })
        .unwrap();

    let first = common::json_body(app.clone().oneshot(common::get("/")).await.unwrap()).await;
    let second = common::json_body(app.oneshot(common::get("/")).await.unwrap()).await;

    assert_eq!(first, second);
}
