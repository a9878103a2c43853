//! BaZi REST API Module
//!
//! `POST /bazi/analyze`: resolves the birth input against the configured
//! defaults, runs the chart service and assembles the response.

use axum::{extract::State, response::Json, routing::post, Router};
use soulchat_adapters::{resolve_birth, AnalysisConfig, BirthInput};
use soulchat_core::ChartService;
use std::sync::Arc;
use tracing::info;

use crate::dtos::*;
use crate::error::{ApiError, ApiResult};

// ===== Application State =====

#[derive(Clone)]
pub struct BaziApiAppState {
    pub chart_service: Arc<dyn ChartService>,
    pub analysis: AnalysisConfig,
}

impl BaziApiAppState {
    pub fn new(chart_service: Arc<dyn ChartService>, analysis: AnalysisConfig) -> Self {
        Self {
            chart_service,
            analysis,
        }
    }
}

// ===== API Handlers =====

#[utoipa::path(
    post,
    path = "/bazi/analyze",
    request_body = AnalyzeRequestDto,
    responses(
        (status = 200, description = "Chart computed", body = AnalyzeResponseDto),
        (status = 400, description = "Invalid birth data or timezone", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "bazi"
)]
pub async fn analyze_handler(
    State(state): State<BaziApiAppState>,
    payload: Result<Json<AnalyzeRequestDto>, axum::extract::rejection::JsonRejection>,
) -> ApiResult<Json<AnalyzeResponseDto>> {
    let Json(request) = payload.map_err(ApiError::from)?;

    let birth_input = BirthInput {
        birth_datetime: request.birth_datetime.as_deref(),
        birth_date: request.birth_date.as_deref(),
        birth_time: request.birth_time.as_deref(),
        timezone: request.timezone.as_deref(),
    };
    let resolved = resolve_birth(&birth_input, &state.analysis)?;

    let use_true_solar_time = request
        .use_true_solar_time
        .unwrap_or(state.analysis.default_use_true_solar_time);

    let analysis = state
        .chart_service
        .analyze(&resolved.civil(), use_true_solar_time);

    info!(
        birth_iso = %resolved.iso(),
        timezone = %resolved.timezone,
        dominant = %analysis.chart.elements.dominant,
        "Chart computed"
    );

    let input = InputEchoDto {
        name: request.name,
        birth_iso: resolved.iso(),
        timezone: resolved.timezone,
        use_true_solar_time,
    };

    Ok(Json(AnalyzeResponseDto::new(
        input,
        analysis,
        state.analysis.include_debug,
    )))
}

pub fn bazi_api_routes(state: BaziApiAppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}
