//! Report directory: listing normalization, the listing fallback, delete
//! semantics, and downloads.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use marketscope_api::{build_http_client, ReportClient};
use marketscope_core::ReportType;

use marketscope_console::services::ReportDirectory;
use marketscope_console::state::AppState;

use crate::support;

fn directory(base_url: &str) -> ReportDirectory {
    ReportDirectory::new(ReportClient::new(build_http_client(), base_url.to_string()))
}

#[tokio::test]
async fn test_refresh_normalizes_both_typed_and_untyped_entries() {
    let app = Router::new().route(
        "/api/reports/history",
        get(|| async {
            Json(json!({
                "success": true,
                "reports": [
                    {"path": "report/debate/debate_600519.json", "type": "debate",
                     "stockCode": "600519", "recommendation": "hold"},
                    {"path": "report/600519_analysis.html", "filename": "600519_analysis.html"}
                ]
            }))
        }),
    );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);
    let mut state = AppState::new();

    directory.refresh(&mut state).await;

    assert_eq!(state.reports.len(), 2);
    assert_eq!(state.reports[0].report_type, ReportType::Debate);
    assert_eq!(state.reports[0].recommendation.as_deref(), Some("hold"));
    // No type field: classified from the path.
    assert_eq!(state.reports[1].report_type, ReportType::Html);
}

#[tokio::test]
async fn test_refresh_falls_back_to_plain_listing() {
    let app = Router::new()
        .route(
            "/api/reports/history",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/reports",
            get(|| async { Json(json!({"reports": [{"path": "report/a.html"}]})) }),
        );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);
    let mut state = AppState::new();

    directory.refresh(&mut state).await;

    assert_eq!(state.reports.len(), 1);
    assert_eq!(state.reports[0].path, "report/a.html");
}

#[tokio::test]
async fn test_refresh_degrades_to_empty_when_both_listings_fail() {
    let app = Router::new();
    let base_url = support::serve(app).await;
    let directory = directory(&base_url);

    let mut state = AppState::new();
    state.reports = vec![];

    directory.refresh(&mut state).await;
    assert!(state.reports.is_empty());
}

#[tokio::test]
async fn test_delete_clears_the_displayed_report() {
    let delete_bodies = Arc::new(AtomicUsize::new(0));
    let deletes = delete_bodies.clone();

    let app = Router::new()
        .route(
            "/api/reports/delete",
            post(move |Json(body): Json<Value>| {
                let deletes = deletes.clone();
                async move {
                    // Typed call shape carries the path and type fields.
                    assert_eq!(body["report_path"], "report/debate/debate_600519.json");
                    assert_eq!(body["report_type"], "debate");
                    deletes.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"success": true, "message": "deleted"}))
                }
            }),
        )
        .route(
            "/api/reports/history",
            get(|| async { Json(json!({"success": true, "reports": []})) }),
        );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);
    let mut state = AppState::new();
    state
        .report_view
        .show("report/debate/debate_600519.json", "{}");

    directory
        .delete(
            &mut state,
            "report/debate/debate_600519.json",
            Some(ReportType::Debate),
        )
        .await
        .unwrap();

    assert_eq!(delete_bodies.load(Ordering::SeqCst), 1);
    assert!(state.report_view.path.is_none());
    assert!(state.reports.is_empty());
}

#[tokio::test]
async fn test_delete_leaves_an_unrelated_view_alone() {
    let app = Router::new()
        .route(
            "/api/reports/delete",
            post(|Json(body): Json<Value>| async move {
                // Untyped call shape carries only the path.
                assert_eq!(body["path"], "report/old.html");
                Json(json!({"success": true}))
            }),
        )
        .route(
            "/api/reports/history",
            get(|| async { Json(json!({"success": true, "reports": []})) }),
        );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);
    let mut state = AppState::new();
    state.report_view.show("report/current.html", "<html></html>");

    directory
        .delete(&mut state, "report/old.html", None)
        .await
        .unwrap();

    assert!(state.report_view.is_showing("report/current.html"));
}

#[tokio::test]
async fn test_delete_refusal_is_an_error() {
    let app = Router::new().route(
        "/api/reports/delete",
        post(|| async { Json(json!({"success": false, "error": "file is locked"})) }),
    );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);
    let mut state = AppState::new();
    state.report_view.show("report/a.html", "x");

    let err = directory
        .delete(&mut state, "report/a.html", None)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("file is locked"));
    // A refused delete leaves the view as it was.
    assert!(state.report_view.is_showing("report/a.html"));
}

#[tokio::test]
async fn test_download_returns_filename_and_bytes() {
    let app = Router::new().route(
        "/api/download/{path}",
        get(|| async { "report bytes".to_string() }),
    );

    let base_url = support::serve(app).await;
    let directory = directory(&base_url);

    let (filename, bytes) = directory.download("report/600519_analysis.html").await.unwrap();
    assert_eq!(filename, "600519_analysis.html");
    assert_eq!(bytes, b"report bytes");
}
