#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use mergington::models::ActivityCatalog;
use mergington::web::{self, AppState};
use mergington::ActivityStore;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_EMAIL: &str = "testuser@mergington.edu";

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Router over a freshly seeded store, plus the state so tests can inspect
/// or reset it.
pub fn test_app() -> (Router, AppState) {
    let state = AppState::new(ActivityStore::with_default_seed());
    (web::router(state.clone(), static_dir()), state)
}

pub fn encode(segment: &str) -> String {
    segment.replace('%', "%25").replace(' ', "%20")
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn unregister_uri(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        encode(activity),
        encode(email)
    )
}

pub async fn call(app: &Router, method: Method, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router call")
}

pub async fn call_json(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = call(app, method, uri).await;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn signup(app: &Router, activity: &str, email: &str) -> (StatusCode, Value) {
    call_json(app, Method::POST, &signup_uri(activity, email)).await
}

pub async fn unregister(app: &Router, activity: &str, email: &str) -> (StatusCode, Value) {
    call_json(app, Method::DELETE, &unregister_uri(activity, email)).await
}

pub async fn activities(app: &Router) -> ActivityCatalog {
    let response = call(app, Method::GET, "/activities").await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("activities json")
}

pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    activities(app)
        .await
        .get(activity)
        .unwrap_or_else(|| panic!("missing activity {}", activity))
        .participants
        .clone()
}
