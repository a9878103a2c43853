//! HTTP Request Handlers
//!
//! Service-level endpoints that do not touch the chart engine.

use axum::{http::StatusCode, Json};

use crate::dtos::{ErrorResponse, HealthResponse};

pub const WELCOME_MESSAGE: &str = "SoulChat BaZi API is live!";

/// Liveness text at the root path
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String, content_type = "text/plain")
    ),
    tag = "service"
)]
pub async fn index() -> &'static str {
    tracing::debug!("🔍 Index requested");
    WELCOME_MESSAGE
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "service"
)]
pub async fn health_check() -> Json<HealthResponse> {
    tracing::info!("🔍 Health check requested");
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}
