//! Integration tests for the udplog web adapter.
//!
//! These tests drive the router directly with `tower::ServiceExt::oneshot`
//! and verify the HTTP contract for both store variants.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use udplog_axum::create_router;
use udplog_core::{FileStore, LogRecord, LogStore, MemoryStore};

fn record_at(second: u32, port: u16, message: &str) -> LogRecord {
    LogRecord {
        timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, second).unwrap(),
        source: "127.0.0.1".to_string(),
        source_port: 40000,
        destination_port: port,
        message: message.to_string(),
    }
}

fn content_type(response: &axum::http::Response<axum::body::Body>) -> String {
    response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap_or("").to_string())
        .unwrap_or_default()
}

#[tokio::test]
async fn viewer_page_returns_html() {
    let store = Arc::new(MemoryStore::new(10));
    let app = create_router(store);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = std::str::from_utf8(&body).unwrap();
    assert!(body_str.contains("<!DOCTYPE html>"));
    assert!(body_str.contains("/logs"));
}

#[tokio::test]
async fn logs_endpoint_returns_empty_json_array() {
    let store = Arc::new(MemoryStore::new(10));
    let app = create_router(store);

    let response = app
        .oneshot(Request::builder().uri("/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("application/json"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"[]");
}

#[tokio::test]
async fn logs_endpoint_reflects_appended_records_in_insertion_order() {
    let store = Arc::new(MemoryStore::new(10));
    store.append(record_at(1, 514, "first")).await;
    store.append(record_at(2, 514, "second")).await;

    let app = create_router(store);
    let response = app
        .oneshot(Request::builder().uri("/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["message"], "first");
    assert_eq!(entries[0]["timestamp"], "2025-06-01 10:00:01");
    assert_eq!(entries[0]["source"], "127.0.0.1");
    assert_eq!(entries[0]["source_port"], 40000);
    assert_eq!(entries[0]["destination_port"], 514);
    assert_eq!(entries[1]["message"], "second");
}

#[tokio::test]
async fn logs_endpoint_merges_port_files_newest_first() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(FileStore::new(dir.path(), 1000));
    store.append(record_at(10, 514, "oldest")).await;
    store.append(record_at(30, 1514, "newest")).await;
    store.append(record_at(20, 514, "middle")).await;

    let app = create_router(store);
    let response = app
        .oneshot(Request::builder().uri("/logs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let messages: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["message"].as_str().unwrap())
        .collect();
    assert_eq!(messages, ["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn unknown_path_returns_404_with_empty_body() {
    let store = Arc::new(MemoryStore::new(10));
    let app = create_router(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn favicon_requests_also_hit_the_fallback() {
    let store = Arc::new(MemoryStore::new(10));
    let app = create_router(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/favicon.ico")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
