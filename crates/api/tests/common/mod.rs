#![allow(dead_code)]

use std::sync::Arc;

use autopath_api::config::{LogFormat, ProviderKind, ServerConfig};
use autopath_api::router::build_app_router;
use autopath_api::state::AppState;
use autopath_core::provider::{CurriculumProvider, TemplateProvider};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        provider: ProviderKind::Template,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router backed by [`TemplateProvider`].
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(TemplateProvider))
}

/// Build the full application router around an arbitrary provider.
pub fn build_test_app_with(provider: Arc<dyn CurriculumProvider>) -> Router {
    build_app_router(AppState::new(test_config(), provider))
}

/// A valid intake in the current wire format.
pub fn intake_json() -> Value {
    json!({
        "skill": "Rust",
        "targetGoal": "Build a command line tool",
        "experienceLevel": "Beginner",
        "timeBudget": 8,
        "duration": 8,
        "learningStyle": ["Step-by-step"]
    })
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

/// POST a raw string with a JSON content type, for malformed-body tests.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
