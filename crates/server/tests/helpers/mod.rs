//! Test helpers for building the router in-process

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use soulchat_adapters::config::AppConfig;
use soulchat_server::{bootstrap::ServerComponents, create_api_router};
use tower::ServiceExt;

/// Router over the placeholder engine with default configuration
pub fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> Router {
    create_api_router(ServerComponents::new(config))
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

/// POST to `/bazi/analyze` and return status plus parsed body
pub async fn analyze(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = post_json(app, "/bazi/analyze", body).await;
    let status = response.status();
    (status, body_json(response).await)
}
