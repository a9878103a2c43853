//! Centralized API Router
//!
//! Single point of entry for all routes, used by both the binary and the
//! integration tests.

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api_docs::openapi_json;
use crate::bazi_api::{bazi_api_routes, BaziApiAppState};
use crate::bootstrap::ServerComponents;
use crate::handlers::{health_check, index, not_found};
use crate::middleware::{add_request_id, cors_layer};

pub fn create_api_router(components: ServerComponents) -> Router {
    let bazi_state = BaziApiAppState::new(
        components.chart_service.clone(),
        components.config.analysis.clone(),
    );

    let app = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        .nest("/bazi", bazi_api_routes(bazi_state))
        .fallback(not_found)
        .layer(middleware::from_fn(add_request_id))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    info!("✅ Routes registered: /, /health, /openapi.json, /bazi/analyze");
    app
}
