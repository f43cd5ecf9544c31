//! Health/readiness probe and page rendering tests.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use creative_agent::services::providers::mock::{MockReply, MockTextProvider};
use creative_agent::startup::{build_router, AppState};
use reqwest::Client;
use secrecy::Secret;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "creative-agent");
}

#[tokio::test]
async fn readiness_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn index_page_renders_html() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/html"));
}

/// Router-level check without binding a listener. The short dev-style secret
/// also exercises signing-key derivation from secrets under 64 bytes.
#[tokio::test]
async fn router_routes_work() {
    let state = AppState {
        text_provider: Arc::new(MockTextProvider::replying(MockReply::Empty)),
    };
    let app = build_router(state, &Secret::new("dev-secret-key".to_string()));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
